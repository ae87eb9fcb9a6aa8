//! Fixed-rate sampler
//!
//! Composes clock, scheduler, channel reader, offset corrector and line
//! writer into the acquisition loop. The loop has two states:
//!
//! - **Idle**: the deadline has not been reached, [`Sampler::poll`]
//!   returns [`Poll::Idle`] with the time left.
//! - **Sampling**: read both channels, correct, emit one line, advance
//!   the deadline by one period, all in one call. The sampler is back in
//!   Idle when the call returns.
//!
//! There is no terminal state. The caller polls forever.

pub mod stats;
pub mod writer;

use cadence_hal::{AdcReader, MicrosClock, Tick, UartTx};
use cadence_protocol::Record;

use crate::acquisition::{correct, ChannelReader};
use crate::config::{ConfigError, SamplerConfig};
use crate::scheduler::DeadlineScheduler;

pub use stats::SamplerStats;
pub use writer::LineWriter;

/// What one call to [`Sampler::poll`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    /// Deadline not reached yet
    Idle {
        /// Microseconds until the next deadline
        wait_us: u32,
    },
    /// One record was taken and emitted
    Sampled(SampleReport),
}

/// Outcome of one sampling instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleReport {
    /// Deadline this record belongs to
    pub deadline: Tick,
    /// Corrected values that were emitted
    pub record: Record,
    /// How far past the deadline the sample was taken (µs)
    pub lateness_us: u32,
    /// Whether the UART accepted the line
    pub delivered: bool,
}

/// Acquisition loop state
///
/// Owns every piece of mutable state the loop needs, so nothing lives in
/// globals and the whole sequence can be driven from a test with
/// injected ticks via [`poll_at`](Self::poll_at).
pub struct Sampler<C, A, T> {
    clock: C,
    reader: ChannelReader<A>,
    writer: LineWriter<T>,
    scheduler: DeadlineScheduler,
    config: SamplerConfig,
    period_us: u32,
    stats: SamplerStats,
}

impl<C, A, T> Sampler<C, A, T>
where
    C: MicrosClock,
    A: AdcReader,
    T: UartTx,
{
    /// Validate `config` and start the schedule at the current tick
    ///
    /// The first sample is due immediately.
    pub fn start(mut clock: C, adc: A, tx: T, config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if adc.resolution() != config.resolution {
            return Err(ConfigError::ResolutionMismatch);
        }

        let start = clock.now_micros();

        Ok(Self {
            clock,
            reader: ChannelReader::new(adc, config.inputs),
            writer: LineWriter::new(tx, config.line_ending),
            scheduler: DeadlineScheduler::new(start),
            period_us: config.period_us(),
            config,
            stats: SamplerStats::default(),
        })
    }

    /// Read the clock and sample if the deadline has been reached
    pub fn poll(&mut self) -> Poll {
        let now = self.clock.now_micros();
        self.poll_at(now)
    }

    /// Sample if `now` has reached the deadline
    ///
    /// Takes at most one sample per call. After a stall, keep calling
    /// until it returns [`Poll::Idle`] to work off the backlog.
    pub fn poll_at(&mut self, now: Tick) -> Poll {
        if self.scheduler.is_due(now) {
            Poll::Sampled(self.sample(now))
        } else {
            Poll::Idle {
                wait_us: self.scheduler.next_deadline().wrapping_sub(now),
            }
        }
    }

    fn sample(&mut self, now: Tick) -> SampleReport {
        let deadline = self.scheduler.next_deadline();
        let lateness_us = self.scheduler.lateness(now);

        let raw = self.reader.read_pair();
        let record = Record::new(
            correct(raw.ch1, self.config.bias),
            correct(raw.ch2, self.config.bias),
        );

        // Transport failures are not retried; the host sees a gap
        let delivered = self.writer.emit(&record).is_ok();

        self.scheduler.advance(self.period_us);
        self.stats.record(lateness_us, self.period_us, delivered);

        SampleReport {
            deadline,
            record,
            lateness_us,
            delivered,
        }
    }

    /// Tick at which the next sample is due
    pub fn next_deadline(&self) -> Tick {
        self.scheduler.next_deadline()
    }

    /// Sampling period (µs)
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Active configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Counters since start
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }
}
