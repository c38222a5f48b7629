use anyhow::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use streamreg::ui::cli::drivers::InquireDriver;
use streamreg::ui::cli::wizard::prompt_choice;
use streamreg::ui::types::build::build_task;
use streamreg::ui::types::choices::{CsvParameters, StreamChoice, TaskChoice, TrainThenPredictParams};

const USAGE: &str = "\
Usage: streamreg <file to train on> [<file to predict>]
       streamreg --config <task.json>
       streamreg                      (interactive)";

enum Mode {
    Files { train: PathBuf, predict: Option<PathBuf> },
    Config(PathBuf),
    Wizard,
}

fn parse_args(args: &[String]) -> Result<Mode> {
    match args {
        [] => Ok(Mode::Wizard),
        [flag, path] if flag == "--config" || flag == "-c" => Ok(Mode::Config(path.into())),
        [flag, ..] if flag == "--config" || flag == "-c" => bail!("--config takes exactly one path"),
        [flag] if flag.starts_with('-') => bail!("unknown option '{flag}'"),
        [train] => Ok(Mode::Files {
            train: train.into(),
            predict: None,
        }),
        [train, predict] => Ok(Mode::Files {
            train: train.into(),
            predict: Some(predict.into()),
        }),
        _ => bail!("too many arguments"),
    }
}

fn task_choice(mode: Mode) -> Result<TaskChoice> {
    match mode {
        Mode::Files { train, predict } => {
            let csv = |path| StreamChoice::CsvFile(CsvParameters { path });
            Ok(TaskChoice::TrainThenPredict(TrainThenPredictParams::new(
                csv(train),
                predict.map(csv),
            )))
        }
        Mode::Config(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        Mode::Wizard => prompt_choice::<TaskChoice, _>(&InquireDriver),
    }
}

fn run(choice: TaskChoice) -> Result<()> {
    let TaskChoice::TrainThenPredict(params) = &choice;
    let export = params.report_path.clone().map(|p| (p, params.report_format));

    let mut task = build_task(choice)?;
    let report = task.run()?;
    print!("{report}");

    if let Some((path, format)) = export {
        report
            .export(&path, format)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("report written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match parse_args(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match task_choice(mode).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_files() {
        match parse_args(&args(&["a.csv"])).unwrap() {
            Mode::Files { train, predict } => {
                assert_eq!(train, PathBuf::from("a.csv"));
                assert!(predict.is_none());
            }
            _ => panic!("expected file mode"),
        }
        match parse_args(&args(&["a.csv", "b.csv"])).unwrap() {
            Mode::Files { predict, .. } => assert_eq!(predict, Some(PathBuf::from("b.csv"))),
            _ => panic!("expected file mode"),
        }
    }

    #[test]
    fn config_and_wizard_modes() {
        assert!(matches!(parse_args(&args(&["--config", "t.json"])).unwrap(), Mode::Config(_)));
        assert!(matches!(parse_args(&[]).unwrap(), Mode::Wizard));
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(&args(&["a", "b", "c"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn file_mode_predicts_on_train_file_by_default() {
        let mode = parse_args(&args(&["runs.csv"])).unwrap();
        let TaskChoice::TrainThenPredict(p) = task_choice(mode).unwrap();
        assert_eq!(p.target_field, "user_us");
        assert!(p.predict.is_none());
        assert_eq!(
            p.train,
            StreamChoice::CsvFile(CsvParameters {
                path: "runs.csv".into()
            })
        );
    }
}
