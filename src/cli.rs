//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "udmorph", about = "CONLL-U corpus annotation tool.")]
/// Holds every command that is callable by the `udmorph` command.
pub enum Udmorph {
    #[structopt(about = "Clean a raw article corpus (no morphology)")]
    Clean(Clean),
    #[structopt(about = "Annotate a raw article corpus into CONLL-U")]
    Annotate(Annotate),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "dataset location (contains n_raw.txt)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned-text destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Annotate command and parameters.
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "dataset location (contains n_raw.txt)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "conllu destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lexicon",
        help = "path to the analyzer lexicon (form<TAB>lemma<TAB>tag)"
    )]
    pub lexicon: PathBuf,
    #[structopt(
        long = "tagset",
        default_value = "mystem",
        help = "native tagset of the lexicon (mystem|opencorpora)"
    )]
    pub tagset: String,
}
