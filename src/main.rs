// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! Runs the interactive TUI. `--size`, `--algorithm` and `--speed` preset the initial state;
//! everything else is driven from inside the TUI (see the footer hints).

use std::error::Error;

use proteus::model::{Algorithm, SpeedTier};
use proteus::tui::StartOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--size <n>] [--algorithm <name>] [--speed <tier>]\n\nPresets the initial TUI state; all three are optional.\n--size is clamped to [5, 200].\n--algorithm is one of: Bubble, Selection, Insertion, Merge, Quick, Heap.\n--speed is one of: Slow, Medium, Fast (default Medium)."
    );
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<StartOptions, ()> {
    let mut options = StartOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                if options.size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let size: usize = raw.parse().map_err(|_| ())?;
                options.size = Some(size);
            }
            "--algorithm" => {
                if options.algorithm.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let algorithm: Algorithm = raw.parse().map_err(|_| ())?;
                options.algorithm = Some(algorithm);
            }
            "--speed" => {
                if options.speed.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let speed: SpeedTier = raw.parse().map_err(|_| ())?;
                options.speed = Some(speed);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        proteus::tui::run_with_options(options)
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use proteus::model::{Algorithm, SpeedTier};
    use proteus::tui::StartOptions;

    use super::parse_options;

    fn parse(args: &[&str]) -> Result<StartOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, StartOptions::default());
    }

    #[test]
    fn parses_size() {
        let options = parse(&["--size", "80"]).expect("parse options");
        assert_eq!(options.size, Some(80));
        assert_eq!(options.algorithm, None);
        assert_eq!(options.speed, None);
    }

    #[test]
    fn parses_algorithm_and_speed_in_any_order() {
        let options =
            parse(&["--speed", "fast", "--algorithm", "quick"]).expect("parse options");
        assert_eq!(options.algorithm, Some(Algorithm::Quick));
        assert_eq!(options.speed, Some(SpeedTier::Fast));

        let options =
            parse(&["--algorithm", "quick", "--speed", "fast"]).expect("parse options");
        assert_eq!(options.algorithm, Some(Algorithm::Quick));
        assert_eq!(options.speed, Some(SpeedTier::Fast));
    }

    #[test]
    fn rejects_unknown_args() {
        parse(&["--nope"]).unwrap_err();
        parse(&["extra"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse(&["--size", "10", "--size", "20"]).unwrap_err();
        parse(&["--speed", "slow", "--speed", "fast"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse(&["--size"]).unwrap_err();
        parse(&["--algorithm"]).unwrap_err();
        parse(&["--speed"]).unwrap_err();
    }

    #[test]
    fn rejects_non_numeric_size() {
        parse(&["--size", "abc"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_algorithm_or_speed() {
        parse(&["--algorithm", "shell"]).unwrap_err();
        parse(&["--speed", "warp"]).unwrap_err();
    }
}
