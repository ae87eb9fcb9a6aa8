//! Sampler health monitor
//!
//! Logs the statistics the sampler task publishes. Never touches the
//! UART, so the record stream carries nothing but records.

use defmt::*;

use cadence_core::sampler::SamplerStats;

use crate::channels::SAMPLER_STATS;

#[embassy_executor::task]
pub async fn monitor_task() {
    info!("Monitor task started");

    let mut previous = SamplerStats::default();

    loop {
        let stats = SAMPLER_STATS.wait().await;

        let records = stats.records.wrapping_sub(previous.records);
        let delivered = stats.delivered().wrapping_sub(previous.delivered());
        let catch_up = stats.catch_up_records.wrapping_sub(previous.catch_up_records);
        let write_errors = stats.write_errors.wrapping_sub(previous.write_errors);

        if write_errors > 0 {
            warn!(
                "{} records, {} dropped by UART ({} total)",
                records, write_errors, stats.write_errors
            );
        } else {
            debug!(
                "{} records sent, {} catch-up, max lateness {} us",
                delivered, catch_up, stats.max_lateness_us
            );
        }

        previous = stats;
    }
}
