use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Applets log at the requested level, the rules engine and dependencies only warn.
    fn filter(&self) -> Targets {
        Targets::new()
            .with_target("cli::applet", self.verbosity)
            .with_target("lib::chess", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity))
    }

    /// Spans are only reported on close when tracing moves.
    fn span_events(&self) -> FmtSpan {
        if self.verbosity == Level::TRACE {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let writer = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(self.span_events())
            .with_writer(stderr);

        registry().with(self.filter()).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
