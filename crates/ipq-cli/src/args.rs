use argh::FromArgs;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Heap,
    OrderedSet,
    Scan,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [BackendKind::Heap, BackendKind::OrderedSet, BackendKind::Scan];

    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Heap => "heap",
            BackendKind::OrderedSet => "set",
            BackendKind::Scan => "scan",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "heap" => Ok(BackendKind::Heap),
            "set" => Ok(BackendKind::OrderedSet),
            "scan" => Ok(BackendKind::Scan),
            other => Err(format!("unknown backend `{other}`, expected heap, set or scan")),
        }
    }
}

#[derive(FromArgs, Debug, PartialEq)]
/// Indexed priority queue demo and replay driver
pub struct Arguments {
    /// verbose mode
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    #[argh(subcommand)]
    pub cmd: SubCommandEnum,
}

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum SubCommandEnum {
    Demo(DemoArguments),
    Replay(ReplayArguments),
}

#[derive(FromArgs, Debug, PartialEq)]
/// load a few words, update two of them and print the pop order
#[argh(subcommand, name = "demo")]
pub struct DemoArguments {
    /// backend: [`heap`, `set`, `scan`]; all of them if omitted
    #[argh(option)]
    pub backend: Option<BackendKind>,
}

#[derive(FromArgs, Debug, PartialEq)]
/// replay one random workload on every backend, timing each and checking they agree
#[argh(subcommand, name = "replay")]
pub struct ReplayArguments {
    /// number of operations
    #[argh(option, default = "1_000_000")]
    pub ops: usize,

    /// size of the key space
    #[argh(option, default = "100_000")]
    pub keys: u32,

    /// largest generated value
    #[argh(option, default = "100_000_000")]
    pub max_value: u32,

    /// entries bulk loaded before replay
    #[argh(option, default = "100_000")]
    pub initial: usize,

    /// random seed
    #[argh(option, default = "42")]
    pub seed: u64,

    /// skip the O(n) scan backend
    #[argh(switch)]
    pub skip_scan: bool,
}
