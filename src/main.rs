//! # udmorph
//!
//! udmorph turns a directory of raw-text articles into a CONLL-U
//! annotated corpus: articles are segmented into sentences, sentences
//! into tokens, and tokens annotated with lemma, part-of-speech and
//! morphological features in Universal Dependencies vocabulary.
//!
//! ## Getting started
//!
//! ```sh
//! udmorph 0.1.0
//! CONLL-U corpus annotation tool.
//!
//! USAGE:
//!     udmorph <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     annotate    Annotate a raw article corpus into CONLL-U
//!     clean       Clean a raw article corpus (no morphology)
//!     help        Prints this message or the help of the given subcommand(s)
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use udmorph::analyzer::TsvLexicon;
use udmorph::annotate::{Annotate, UdAnnotator};
use udmorph::corpus::CorpusManager;
use udmorph::error::Error;
use udmorph::pipeline::{AnnotationPipeline, Pipeline};
use udmorph::tagset::{MystemConverter, OpenCorporaConverter};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Udmorph::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Udmorph::Clean(c) => {
            let corpus = CorpusManager::new(&c.src)?;
            std::fs::create_dir_all(&c.dst)?;

            let mut pipeline = AnnotationPipeline::new(corpus, c.dst);
            pipeline.run()?;
        }

        cli::Udmorph::Annotate(a) => {
            let corpus = CorpusManager::new(&a.src)?;
            std::fs::create_dir_all(&a.dst)?;

            let annotator: Box<dyn Annotate> = match a.tagset.as_str() {
                "mystem" => Box::new(UdAnnotator::new(
                    TsvLexicon::mystem(&a.lexicon)?,
                    MystemConverter,
                )),
                "opencorpora" => Box::new(UdAnnotator::new(
                    TsvLexicon::open_corpora(&a.lexicon)?,
                    OpenCorporaConverter,
                )),
                other => return Err(Error::Custom(format!("unknown tagset: {}", other))),
            };

            let mut pipeline = AnnotationPipeline::with_annotator(corpus, a.dst, annotator);
            pipeline.run()?;
        }
    };
    Ok(())
}
