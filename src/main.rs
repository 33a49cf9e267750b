//! Terminal front-end for the sliding-window game

use anyhow::Result;
use clap::Parser;

use shiftac::eval::{EvalRegistry, EvalWeights, DEFAULT_EVAL};
use shiftac::ui::{run_interactive, run_self_play_with_output, AppConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum depth for iterative deepening
    #[arg(long = "engine-depth", default_value_t = 6)]
    engine_depth: u8,

    /// Ranked engine lines to report per depth (0 or less disables
    /// engine reports)
    #[arg(long = "multi-pv", default_value_t = 3)]
    multi_pv: i32,

    /// Evaluation plugin for both sides
    #[arg(long = "eval", default_value = DEFAULT_EVAL)]
    eval: String,

    /// Override the evaluation plugin for X
    #[arg(long = "eval-x")]
    eval_x: Option<String>,

    /// Override the evaluation plugin for O
    #[arg(long = "eval-o")]
    eval_o: Option<String>,

    /// Run computer vs computer without interactive input
    #[arg(long = "self-play")]
    self_play: bool,

    /// Print registered evaluation plugins and exit
    #[arg(long = "list-evals")]
    list_evals: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let registry = EvalRegistry::with_builtins();

    if args.list_evals {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolve = |name: &str| {
        let plugin = registry.get_or_default(name);
        if plugin.name != name {
            log::warn!("unknown eval '{name}', falling back to '{}'", plugin.name);
        }
        plugin
    };
    let eval_x = resolve(args.eval_x.as_deref().unwrap_or(&args.eval));
    let eval_o = resolve(args.eval_o.as_deref().unwrap_or(&args.eval));

    // The terminal-only plugin folds depth into a +-10 band; deeper
    // searches make a slow win indistinguishable from a draw
    if args.engine_depth as i32 >= EvalWeights::TERMINAL_WIN
        && (eval_x.name == DEFAULT_EVAL || eval_o.name == DEFAULT_EVAL)
    {
        log::warn!(
            "engine depth {} flattens the '{}' eval's win scores; use a depth below {}",
            args.engine_depth,
            DEFAULT_EVAL,
            EvalWeights::TERMINAL_WIN,
        );
    }

    let config = AppConfig {
        engine_depth: args.engine_depth,
        multi_pv: args.multi_pv,
        eval_x,
        eval_o,
    };

    if args.self_play {
        run_self_play_with_output(&config)?;
        return Ok(());
    }

    run_interactive(&config)
}
