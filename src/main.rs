// SPDX-License-Identifier: MPL-2.0
use iced_portal::app::{self, Flags};
use iced_portal::routing::RouteTable;
use iced_portal::theme;
use pico_args;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        start_route: args.opt_value_from_str("--route").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    // Configuration errors abort before any view mounts.
    let resolver = theme::load().unwrap_or_else(|err| {
        tracing::error!(%err, "design token dictionary is invalid");
        std::process::exit(1);
    });
    let routes = RouteTable::standard();
    if let Err(err) = routes.validate() {
        tracing::error!(%err, "route table is invalid");
        std::process::exit(1);
    }

    app::run(flags, resolver, routes)
}
