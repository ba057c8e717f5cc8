//! Batch tool that filters speech recordings, normalizes their active level
//! and mixes in noise at a chosen signal-to-noise ratio.

use std::path::PathBuf;

use noisemix::config::{
    ConfigError, FilterType, LevelMode, MixConfig, ProcessingConfig, SampleRate,
};
use noisemix::{lists, logging, process};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug)]
struct Options {
    input_list: PathBuf,
    output_list: PathBuf,
    config: ProcessingConfig,
    log_file: Option<PathBuf>,
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    logging::init(options.log_file.as_deref()).map_err(|err| err.to_string())?;

    options.config.validate().map_err(|err| err.to_string())?;
    let pairs =
        lists::pair_lists(&options.input_list, &options.output_list).map_err(|err| err.to_string())?;
    let reports = process::run(&pairs, &options.config).map_err(|err| err.to_string())?;

    let overloads = reports
        .iter()
        .filter(|report| report.overload_factor.is_some())
        .count();
    println!("Processed {} files ({} overload corrected)", reports.len(), overloads);
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut input_list: Option<PathBuf> = None;
    let mut output_list: Option<PathBuf> = None;
    let mut noise_file: Option<PathBuf> = None;
    let mut snr_db: Option<f64> = None;
    let mut snr_range_db: Option<f64> = None;
    let mut index_list: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut filter: Option<FilterType> = None;
    let mut level_mode = LevelMode::G712;
    let mut norm_level_db: Option<f64> = None;
    let mut sample_rate = SampleRate::Hz8k;
    let mut dc_compensation = false;
    let mut log_file: Option<PathBuf> = None;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--input-list" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--input-list requires a value".to_string())?;
                input_list = Some(PathBuf::from(value));
            }
            "--output-list" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--output-list requires a value".to_string())?;
                output_list = Some(PathBuf::from(value));
            }
            "--noise" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--noise requires a value".to_string())?;
                noise_file = Some(PathBuf::from(value));
            }
            "--snr" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--snr requires a value".to_string())?;
                snr_db = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("Invalid --snr value: {value}"))?,
                );
            }
            "--snr-range" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--snr-range requires a value".to_string())?;
                let range = value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid --snr-range value: {value}"))?;
                if range < 0.0 {
                    return Err(format!("--snr-range must not be negative: {value}"));
                }
                snr_range_db = Some(range);
            }
            "--index-list" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--index-list requires a value".to_string())?;
                index_list = Some(PathBuf::from(value));
            }
            "--seed" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--seed requires a value".to_string())?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            "--filter" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--filter requires a value".to_string())?;
                filter = Some(
                    FilterType::parse(value)
                        .ok_or_else(|| format!("Unknown --filter value: {value}"))?,
                );
            }
            "--level-mode" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--level-mode requires a value".to_string())?;
                level_mode = LevelMode::parse(value)
                    .ok_or_else(|| format!("Unknown --level-mode value: {value}"))?;
            }
            "--norm-level" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--norm-level requires a value".to_string())?;
                norm_level_db = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("Invalid --norm-level value: {value}"))?,
                );
            }
            "--rate-16k" => {
                sample_rate = SampleRate::Hz16k;
            }
            "--dc-compensation" => {
                dc_compensation = true;
            }
            "--log-file" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--log-file requires a value".to_string())?;
                log_file = Some(PathBuf::from(value));
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }

    let input_list = input_list.ok_or_else(|| "--input-list is required".to_string())?;
    let output_list = output_list.ok_or_else(|| "--output-list is required".to_string())?;

    let mix = match noise_file {
        Some(noise_file) => {
            let snr_db = snr_db.ok_or_else(|| ConfigError::MixingWithoutSnr.to_string())?;
            Some(MixConfig {
                noise_file,
                snr_db,
                snr_range_db,
                index_list,
                seed,
            })
        }
        None => None,
    };

    Ok(Some(Options {
        input_list,
        output_list,
        config: ProcessingConfig {
            sample_rate,
            filter,
            level_mode,
            dc_compensation,
            norm_level_db,
            mix,
        },
        log_file,
    }))
}

fn help_text() -> String {
    [
        "noisemix",
        "",
        "Filters speech files, normalizes their active speech level and adds",
        "noise at a target signal-to-noise ratio.",
        "",
        "Usage:",
        "  noisemix --input-list <file> --output-list <file> [options]",
        "",
        "Options:",
        "  --input-list <file>   List of input files, one path per entry (required).",
        "  --output-list <file>  List of output files, paired in order (required).",
        "  --filter <name>       Filter characteristic: g712, p341, irs or mirs.",
        "  --norm-level <dB>     Normalize the active speech level to this value.",
        "  --noise <file>        Noise file to mix into every input.",
        "  --snr <dB>            Target signal-to-noise ratio (required with --noise).",
        "  --snr-range <dB>      Add a uniform random offset in [0, range] to the SNR.",
        "  --index-list <file>   Noise start offsets, one per input file.",
        "  --seed <u64>          Seed for segment selection and SNR jitter.",
        "  --level-mode <name>   Level convention: snr_4khz, snr_8khz or a_weight",
        "                        (default: measure after G.712 filtering).",
        "  --rate-16k            Inputs are sampled at 16 kHz instead of 8 kHz.",
        "  --dc-compensation     Remove DC offsets before level measurement.",
        "  --log-file <file>     Append the run log to this file.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn minimal_arguments_parse() {
        let options = parse_args(args(&[
            "--input-list",
            "in.list",
            "--output-list",
            "out.list",
            "--filter",
            "g712",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.config.filter, Some(FilterType::G712));
        assert_eq!(options.config.sample_rate, SampleRate::Hz8k);
        assert!(options.config.mix.is_none());
    }

    #[test]
    fn noise_without_snr_is_rejected() {
        let err = parse_args(args(&[
            "--input-list",
            "in.list",
            "--output-list",
            "out.list",
            "--noise",
            "babble.raw",
        ]))
        .unwrap_err();
        assert!(err.contains("SNR"));
    }

    #[test]
    fn full_mixing_configuration_parses() {
        let options = parse_args(args(&[
            "--input-list",
            "in.list",
            "--output-list",
            "out.list",
            "--noise",
            "babble.raw",
            "--snr",
            "12.5",
            "--snr-range",
            "3",
            "--seed",
            "7",
            "--rate-16k",
            "--level-mode",
            "snr_8khz",
        ]))
        .unwrap()
        .unwrap();
        let mix = options.config.mix.unwrap();
        assert_eq!(mix.snr_db, 12.5);
        assert_eq!(mix.snr_range_db, Some(3.0));
        assert_eq!(mix.seed, Some(7));
        assert_eq!(options.config.sample_rate, SampleRate::Hz16k);
        assert_eq!(options.config.level_mode, LevelMode::Band8k);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn help_returns_without_options() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }
}
