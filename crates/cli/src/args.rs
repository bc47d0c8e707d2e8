use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// measure ULP distances between single-precision floats
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Pair(PairArgs),
    Check(CheckArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "pair")]
/// distance between two values (decimal or 0x bit pattern, put `--` before negative values)
pub struct PairArgs {
    /// first value
    #[argh(positional)]
    pub a: String,
    /// second value
    #[argh(positional)]
    pub b: String,
    /// fail when the distance exceeds this many ULP
    #[argh(option, short = 't')]
    pub tolerance: Option<u32>,
    /// print JSON
    #[argh(switch)]
    pub json: bool,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "check")]
/// compare two value files element by element
pub struct CheckArgs {
    /// expected values
    #[argh(option, short = 'e')]
    pub expected: String,
    /// actual values
    #[argh(option, short = 'a')]
    pub actual: String,
    /// allowed ULP distance per element
    #[argh(option, short = 't', default = "0")]
    pub tolerance: u32,
    /// files are raw little-endian f32 dumps instead of fvecs
    #[argh(switch)]
    pub raw: bool,
    /// print the full report as JSON
    #[argh(switch)]
    pub json: bool,
}
