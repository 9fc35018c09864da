use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Args;

pub fn init_logger(args: &Args) {
    let filter = EnvFilter::try_new(args.log.directives(args.debug))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if args.log.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
