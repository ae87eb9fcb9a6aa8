//! Cadence - Two-Channel EMG Sampler Firmware
//!
//! Samples two analog EMG front-end outputs at a fixed rate, removes the
//! front end's DC bias and streams `ch1,ch2` lines over UART0.
//!
//! Named for the steady rhythm the sampler keeps: one record per period,
//! no drift.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::Pull;
use embassy_rp::uart;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use cadence_hal_rp2040::adc::{AdcChannel, RpAdc};
use cadence_hal_rp2040::clock::EmbassyClock;
use cadence_hal_rp2040::uart::{embassy_config, RpSerial};

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cadence firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    if let Err(e) = config::SAMPLER.validate() {
        defmt::panic!("Invalid sampler configuration: {:?}", e);
    }
    info!(
        "Config: {} Hz, bias {} ({}), {}-bit, line ending {:?}",
        config::SAMPLER.sample_rate_hz,
        config::SAMPLER.bias,
        config::BIAS_SOURCE,
        config::SAMPLER.resolution.bits(),
        config::SAMPLER.line_ending
    );

    // UART0 TX on GPIO0, RX unused
    let serial = RpSerial::new(uart::UartTx::new_blocking(
        p.UART0,
        p.PIN_0,
        embassy_config(&config::UART),
    ));
    info!("UART0: {} baud, 8N1", config::UART.baudrate);

    let max_bytes = config::SAMPLER.max_bytes_per_second();
    if max_bytes > config::UART.bytes_per_second() {
        warn!(
            "Worst-case stream needs {} B/s but UART carries {} B/s; records will be bursty",
            max_bytes,
            config::UART.bytes_per_second()
        );
    }

    // Blocking ADC with all four external inputs
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let adc = RpAdc::new(
        adc,
        [
            Channel::new_pin(p.PIN_26, Pull::None),
            Channel::new_pin(p.PIN_27, Pull::None),
            Channel::new_pin(p.PIN_28, Pull::None),
            Channel::new_pin(p.PIN_29, Pull::None),
        ],
        config::SAMPLER.resolution,
    );

    for (i, input) in config::SAMPLER.inputs.iter().enumerate() {
        if let Some(channel) = AdcChannel::from_index(*input) {
            info!(
                "Channel {}: {:?} (GPIO{})",
                i + 1,
                channel,
                channel.gpio()
            );
        }
    }

    // Let the front end settle before the first record
    info!("Waiting {} ms for front end", config::SAMPLER.startup_delay_ms);
    Timer::after_millis(u64::from(config::SAMPLER.startup_delay_ms)).await;

    spawner
        .spawn(tasks::sampler_task(EmbassyClock::new(), adc, serial))
        .unwrap();
    spawner.spawn(tasks::monitor_task()).unwrap();

    info!("All tasks spawned");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
