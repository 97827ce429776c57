use std::env;
use std::process::ExitCode;

use select_core::cli::args::{self, CliArgs};
use select_core::cli::output::{self, OutputPreferences};
use select_core::cli::prompt::{self, PromptOutcome};
use select_core::config::ConfigManager;
use select_core::selector::GroupedSelector;

fn main() -> ExitCode {
    let args = match args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            output::error(err);
            output::info(args::USAGE);
            return ExitCode::from(2);
        }
    };

    let config = match ConfigManager::new().load() {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("falling back to default config: {err}"));
            Default::default()
        }
    };

    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode || args.plain,
        quiet_mode: config.quiet_mode || args.quiet,
    });
    select_core::init();

    run(args)
}

fn run(args: CliArgs) -> ExitCode {
    let mut selector = GroupedSelector::of_strings(args.label);
    for (name, items) in args.groups {
        selector.add_group_items(name, items);
    }

    selector.print();

    let number = match args.pick {
        Some(number) => number,
        None => match prompt::pick_number(&selector) {
            Ok(PromptOutcome::Selected(number)) => number,
            Ok(PromptOutcome::Cancelled) => {
                output::info("Selection cancelled.");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                output::error(format!("prompt failed: {err}"));
                return ExitCode::from(2);
            }
        },
    };

    match selector.resolve(number) {
        Ok((group, item)) => {
            tracing::debug!(number, group, "selection resolved");
            println!("{group}\t{item}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::error(err);
            ExitCode::from(2)
        }
    }
}
