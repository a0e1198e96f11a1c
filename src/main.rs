use avl_collections::avl_tree::{AvlSet, VisitingOrder};
use log::{error, info, warn, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;

fn render(set: &AvlSet<i64>, order: VisitingOrder) -> String {
    let mut keys = Vec::new();
    set.visit(order, |key| keys.push(key.to_string()));
    keys.join(" ")
}

fn main() {
    let (flags, keys): (Vec<String>, Vec<String>) =
        env::args().skip(1).partition(|arg| arg == "-v");
    let level = if !flags.is_empty() {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    if let Err(err) = SimpleLogger::init(level, Config::default()) {
        eprintln!("unable to initialize logger: {}", err);
        process::exit(1);
    }

    let mut set = AvlSet::new();
    for arg in keys {
        match arg.parse::<i64>() {
            Ok(key) => {
                if set.insert(key).is_some() {
                    info!("replaced {}", key);
                } else {
                    info!("inserted {}", key);
                }
            },
            Err(err) => warn!("skipping {:?}: {}", arg, err),
        }
    }

    println!("{}", set.graph());
    println!("in-order:   {}", render(&set, VisitingOrder::InOrder));
    println!("pre-order:  {}", render(&set, VisitingOrder::PreOrder));
    println!("post-order: {}", render(&set, VisitingOrder::PostOrder));
    println!("size:       {}", set.size());

    match (set.lower(), set.upper()) {
        (Ok(lower), Ok(upper)) => println!("range:      [{}, {}]", lower, upper),
        (Err(err), _) | (_, Err(err)) => error!("{}", err),
    }
}
