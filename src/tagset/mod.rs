/*! Native tagset → Universal Dependencies conversion.

Each supported analyzer ships its own tag vocabulary. A [TagConverter]
maps one native vocabulary onto the fixed UD one through static
correspondence tables; converters are stateless and built once per
pipeline configuration.

Unknown part-of-speech fragments are an error ([crate::error::Error::Conversion])
for every variant; unknown feature fragments are dropped silently.
!*/
mod mystem;
mod opencorpora;

use std::collections::BTreeMap;

use itertools::Itertools;

pub use mystem::MystemConverter;
pub use opencorpora::{OpenCorporaConverter, OpenCorporaTag};

use crate::error::Error;

/// Maps a native tag onto UD part-of-speech and UD features.
///
/// Implementations are deterministic and carry no per-call state.
pub trait TagConverter {
    /// Native tag shape consumed by this converter.
    type Tag: ?Sized;

    /// Extracts the coarse part-of-speech fragment and converts it to
    /// the UD POS tag. Errors on fragments with no UD counterpart.
    fn convert_pos(&self, tag: &Self::Tag) -> Result<&'static str, Error>;

    /// Converts the morphological feature fragments to a UD feature
    /// string (`Name=Value` pairs, alphabetical by feature name, joined
    /// with `|`). Unrecognized fragments are dropped.
    fn convert_morphological_tags(&self, tag: &Self::Tag) -> String;
}

/// Joins collected features in canonical UD ordering.
/// The BTreeMap keeps feature names alphabetically sorted.
pub(crate) fn format_features(features: &BTreeMap<&'static str, &'static str>) -> String {
    features
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_agree_on_common_categories() {
        let mystem = MystemConverter;
        let opencorpora = OpenCorporaConverter;

        // both analyzers' noun tags land on the same UD token
        assert_eq!(
            mystem.convert_pos("S,муж,од=им,ед").unwrap(),
            opencorpora
                .convert_pos(&OpenCorporaTag::parse("NOUN,anim,masc sing,nomn"))
                .unwrap()
        );
        assert_eq!(
            mystem.convert_pos("V,несов=прош,ед").unwrap(),
            opencorpora
                .convert_pos(&OpenCorporaTag::parse("VERB,impf past,sing"))
                .unwrap()
        );
    }
}
