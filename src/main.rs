use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vs_lol::analysis::MatchupAdvisor;
use vs_lol::cache::{resolve_ddragon_version, VersionCache};
use vs_lol::config::{parse_bind, Config};
use vs_lol::data::loader::load_data_dir;
use vs_lol::data::models::Role;
use vs_lol::display::output::{
    display_champions, display_counters, display_error, display_info, display_matchup,
};
use vs_lol::server::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "VS.LOL")]
#[command(about = "Champion matchup advisor: ratings, lane tips and counter picks", long_about = None)]
struct Args {
    /// Directory holding champions.json and matchups.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web frontend and JSON API
    Serve {
        /// Address to bind (default: 0.0.0.0:5000)
        #[arg(short, long)]
        bind: Option<String>,

        /// Look up the newest Data Dragon patch for champion icons
        #[arg(long)]
        refresh_ddragon: bool,
    },

    /// Analyze one matchup in the terminal
    Matchup {
        /// Your champion id
        my: String,
        /// Enemy champion id
        enemy: String,
    },

    /// List counter picks against a champion
    Counters {
        /// Enemy champion id
        enemy: String,
    },

    /// List available champions
    Champions {
        /// Only show one role (top, jungle, mid, adc, support)
        #[arg(short, long)]
        role: Option<Role>,
    },
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let (dataset, overrides) = load_data_dir(&config.data_dir)?;

    match args.command {
        Command::Serve {
            bind,
            refresh_ddragon,
        } => {
            if let Some(bind) = bind {
                config.bind = parse_bind(&bind)?;
            }

            let ddragon_version = resolve_ddragon_version(
                config.ddragon_version.as_deref(),
                refresh_ddragon,
                &VersionCache::get_cache_path(),
            );
            display_info(&format!(
                "Serving {} champions on http://{} (Data Dragon {})",
                dataset.len(),
                config.bind,
                ddragon_version
            ));

            let state = AppState {
                dataset,
                overrides,
                ddragon_version,
                static_dir: config.static_dir,
                templates_dir: config.templates_dir,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::run_server(config.bind, state))?;
        }
        Command::Matchup { my, enemy } => {
            let advisor = MatchupAdvisor::new(&dataset, &overrides);
            let response = advisor.advise(&my, &enemy)?;
            display_matchup(&response);
        }
        Command::Counters { enemy } => {
            let advisor = MatchupAdvisor::new(&dataset, &overrides);
            let enemy_name = advisor.champion(&enemy)?.name.clone();
            let counters = advisor.counters_for(&enemy)?;
            display_counters(&enemy_name, &counters);
        }
        Command::Champions { role } => {
            let champions: Vec<_> = dataset
                .iter()
                .filter(|c| role.map_or(true, |r| c.role == r))
                .collect();
            display_champions(&champions);
        }
    }

    Ok(())
}
