//! Build script for cadence-firmware
//!
//! - Passes memory.x and the linker scripts to the linker
//! - Validates sampler.toml with the same rules the firmware checks at startup
//! - Generates `sampler_config.rs` with the configuration as constants

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cadence_core::acquisition::SupplyVoltage;
use cadence_core::config::{ConfigError, SamplerConfig};
use cadence_hal::{AdcResolution, UartConfig};
use cadence_protocol::LineEnding;
use serde::Deserialize;

/// GPIOs wired to the RP2040 ADC inputs 0-3
const ADC_GPIO_FIRST: u8 = 26;
const ADC_GPIO_LAST: u8 = 29;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SamplerToml {
    sampling: Sampling,
    front_end: FrontEnd,
    channels: Channels,
    serial: Serial,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Sampling {
    rate_hz: u32,
    #[serde(default = "default_startup_delay_ms")]
    startup_delay_ms: u32,
    #[serde(default = "default_adc_bits")]
    adc_bits: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontEnd {
    supply: Supply,
    bias: Option<u16>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum Supply {
    #[serde(rename = "5v")]
    FiveVolt,
    #[serde(rename = "3v3")]
    ThreeVoltThree,
}

impl From<Supply> for SupplyVoltage {
    fn from(supply: Supply) -> Self {
        match supply {
            Supply::FiveVolt => SupplyVoltage::FiveVolt,
            Supply::ThreeVoltThree => SupplyVoltage::ThreeVoltThree,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Channels {
    ch1_gpio: u8,
    ch2_gpio: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Serial {
    baudrate: u32,
    #[serde(default)]
    line_ending: Terminator,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Terminator {
    #[default]
    Lf,
    Crlf,
}

impl From<Terminator> for LineEnding {
    fn from(terminator: Terminator) -> Self {
        match terminator {
            Terminator::Lf => LineEnding::Lf,
            Terminator::Crlf => LineEnding::CrLf,
        }
    }
}

fn default_startup_delay_ms() -> u32 {
    SamplerConfig::DEFAULT.startup_delay_ms
}

fn default_adc_bits() -> u8 {
    SamplerConfig::DEFAULT.resolution.bits()
}

/// Everything the firmware needs, resolved from sampler.toml
struct Resolved {
    sampler: SamplerConfig,
    uart: UartConfig,
    bias_source: &'static str,
}

fn main() {
    setup_linker();
    let toml = load_config();
    let resolved = resolve(&toml).unwrap_or_else(|errors| fail("invalid values", &errors));
    check_throughput(&resolved);
    generate_config(&resolved);
}

fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Abort the build with every problem listed under one heading
fn fail(what: &str, errors: &[String]) -> ! {
    let body: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
    panic!(
        "\n\n== sampler.toml: {} ==\n{}\n\nSee cadence-firmware/sampler.toml for the expected keys.\n",
        what,
        body.join("\n")
    );
}

fn load_config() -> SamplerToml {
    println!("cargo:rerun-if-changed=sampler.toml");

    let path = Path::new("sampler.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("cannot read file", &[e.to_string()]),
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "cannot parse",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    }
}

/// Describe a rule broken in `SamplerConfig::validate`
fn describe(error: ConfigError, toml: &SamplerToml) -> String {
    match error {
        ConfigError::ZeroSampleRate => "[sampling] rate_hz must be greater than 0".to_string(),
        ConfigError::SampleRateTooHigh => "[sampling] rate_hz must be at most 1000000".to_string(),
        ConfigError::InexactPeriod => format!(
            "[sampling] rate_hz {} does not divide 1000000 exactly",
            toml.sampling.rate_hz
        ),
        ConfigError::BiasOutOfRange => format!(
            "[front_end] bias exceeds the largest {}-bit reading",
            toml.sampling.adc_bits
        ),
        ConfigError::DuplicateInput => "[channels] ch1_gpio and ch2_gpio must differ".to_string(),
        ConfigError::ResolutionMismatch => "[sampling] adc_bits does not match the ADC".to_string(),
    }
}

/// Turn the file into firmware constants, or list everything wrong with it
fn resolve(toml: &SamplerToml) -> Result<Resolved, Vec<String>> {
    let mut errors = Vec::new();

    let resolution = AdcResolution::from_bits(toml.sampling.adc_bits).unwrap_or_else(|| {
        errors.push(format!(
            "[sampling] adc_bits must be {}-{}, got {}",
            AdcResolution::MIN_BITS,
            AdcResolution::MAX_BITS,
            toml.sampling.adc_bits
        ));
        AdcResolution::default()
    });

    // The supply presets are 10-bit counts
    let (bias, bias_source) = match toml.front_end.bias {
        Some(bias) => (bias, "explicit"),
        None if resolution != AdcResolution::BITS_10 => {
            errors.push("[front_end] bias is required when adc_bits is not 10".to_string());
            (0, "explicit")
        }
        None => {
            let name = match toml.front_end.supply {
                Supply::FiveVolt => "5v",
                Supply::ThreeVoltThree => "3v3",
            };
            (SupplyVoltage::from(toml.front_end.supply).bias(), name)
        }
    };

    let mut inputs = [0u8; 2];
    for (i, (name, gpio)) in [
        ("ch1_gpio", toml.channels.ch1_gpio),
        ("ch2_gpio", toml.channels.ch2_gpio),
    ]
    .into_iter()
    .enumerate()
    {
        if (ADC_GPIO_FIRST..=ADC_GPIO_LAST).contains(&gpio) {
            inputs[i] = gpio - ADC_GPIO_FIRST;
        } else {
            errors.push(format!(
                "[channels] {} must be an ADC pin ({}-{}), got {}",
                name, ADC_GPIO_FIRST, ADC_GPIO_LAST, gpio
            ));
        }
    }

    let sampler = SamplerConfig {
        sample_rate_hz: toml.sampling.rate_hz,
        bias,
        resolution,
        inputs,
        line_ending: toml.serial.line_ending.into(),
        startup_delay_ms: toml.sampling.startup_delay_ms,
    };
    if let Err(e) = sampler.validate() {
        errors.push(describe(e, toml));
    }

    if toml.serial.baudrate == 0 {
        errors.push("[serial] baudrate must be greater than 0".to_string());
    }
    let uart = UartConfig {
        baudrate: toml.serial.baudrate,
        ..UartConfig::DEFAULT
    };

    if errors.is_empty() {
        Ok(Resolved {
            sampler,
            uart,
            bias_source,
        })
    } else {
        Err(errors)
    }
}

/// Warn when the worst-case record stream does not fit the baud rate
///
/// Not an error: the UART blocks and the sampler catches up, but the host
/// will see bursts instead of an even stream.
fn check_throughput(resolved: &Resolved) {
    let needed = resolved.sampler.max_bytes_per_second();
    let available = resolved.uart.bytes_per_second();

    if needed > available {
        println!(
            "cargo:warning=sampler.toml: {} Hz needs up to {} bytes/s but {} baud carries {}",
            resolved.sampler.sample_rate_hz, needed, resolved.uart.baudrate, available
        );
    }
}

/// Write `sampler_config.rs` into OUT_DIR
fn generate_config(resolved: &Resolved) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let sampler = &resolved.sampler;

    let source = format!(
        "// Generated by build.rs from sampler.toml. Do not edit.\n\
         \n\
         /// ADC resolution of the values on the wire\n\
         pub const RESOLUTION: AdcResolution = match AdcResolution::from_bits({bits}) {{\n    \
             Some(resolution) => resolution,\n    \
             None => panic!(\"adc_bits out of range\"),\n\
         }};\n\
         \n\
         /// Where the bias came from (\"5v\", \"3v3\" or \"explicit\")\n\
         pub const BIAS_SOURCE: &str = \"{source}\";\n\
         \n\
         /// Sampler settings\n\
         pub const SAMPLER: SamplerConfig = SamplerConfig {{\n    \
             sample_rate_hz: {rate},\n    \
             bias: {bias},\n    \
             resolution: RESOLUTION,\n    \
             inputs: [{in1}, {in2}],\n    \
             line_ending: LineEnding::{ending:?},\n    \
             startup_delay_ms: {delay},\n\
         }};\n\
         \n\
         /// Serial link settings (8-N-1)\n\
         pub const UART: UartConfig = UartConfig {{\n    \
             baudrate: {baud},\n    \
             ..UartConfig::DEFAULT\n\
         }};\n",
        bits = sampler.resolution.bits(),
        source = resolved.bias_source,
        rate = sampler.sample_rate_hz,
        bias = sampler.bias,
        in1 = sampler.inputs[0],
        in2 = sampler.inputs[1],
        ending = sampler.line_ending,
        delay = sampler.startup_delay_ms,
        baud = resolved.uart.baudrate,
    );

    fs::write(out_dir.join("sampler_config.rs"), source).unwrap();
}
