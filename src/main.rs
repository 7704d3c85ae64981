use llrb_sortedmap::{Set, SortedMap};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn initialize_logging() {
    let logger = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("unable to initialize logger: {}", err);
    }
}

fn main() {
    initialize_logging();

    let set: Set<i32> = vec![1, 2, 3].into_iter().collect();
    println!("{}", set);

    let mut map = SortedMap::new();
    map.set("alice", 1);
    map.set("bob", 2);
    println!("{}", map);

    match map.validate() {
        Ok(stats) => {
            info!("entries: {} blacks: {:?}", stats.entries(), stats.blacks());
            if let Some(depths) = stats.depths() {
                depths.pretty_print("");
            }
        }
        Err(err) => eprintln!("{}", err),
    }
}
