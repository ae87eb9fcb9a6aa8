//! Acquisition task
//!
//! Runs the fixed-rate loop: sleep until the next deadline, then let the
//! sampler read, correct and emit. After a stall the sampler returns
//! `Sampled` several times in a row and the backlog is worked off before
//! the task sleeps again.

use defmt::*;
use embassy_time::Timer;

use cadence_core::sampler::{Poll, Sampler};
use cadence_hal_rp2040::adc::RpAdc;
use cadence_hal_rp2040::clock::EmbassyClock;
use cadence_hal_rp2040::uart::RpSerial;

use crate::channels::SAMPLER_STATS;
use crate::config;

#[embassy_executor::task]
pub async fn sampler_task(clock: EmbassyClock, adc: RpAdc<'static>, serial: RpSerial<'static>) {
    let mut sampler = match Sampler::start(clock, adc, serial, config::SAMPLER) {
        Ok(sampler) => sampler,
        Err(e) => {
            error!("Sampler refused configuration: {:?}", e);
            return;
        }
    };

    info!(
        "Sampler running: {} Hz, period {} us, first deadline {}",
        sampler.config().sample_rate_hz,
        sampler.period_us(),
        sampler.next_deadline()
    );

    let publish_every = config::SAMPLER.sample_rate_hz;
    let mut since_publish: u32 = 0;

    loop {
        match sampler.poll() {
            Poll::Idle { wait_us } => {
                Timer::after_micros(u64::from(wait_us)).await;
            }
            Poll::Sampled(report) => {
                if !report.delivered {
                    warn!("UART write failed at deadline {}", report.deadline);
                }

                since_publish += 1;
                if since_publish >= publish_every {
                    since_publish = 0;
                    SAMPLER_STATS.signal(sampler.stats());
                }
            }
        }
    }
}
