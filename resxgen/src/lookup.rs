//! Synthesizes the culture → value dispatch table for a set of defined
//! siblings.

use std::collections::HashSet;

use crate::{cultures, types::DefinedCulture};

/// One case of the synthesized switch: a runtime culture identifier mapped
/// to the name of the defined sibling whose value answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCase {
    pub lcid: u32,
    pub source: String,
}

/// Builds the ordered dispatch table for the given siblings.
///
/// `defined` must be in combination order (tag length descending, then
/// lexicographic), so a specific sibling claims its own identifier before
/// its general sibling sweeps up the remaining descendants. Each sibling
/// contributes its own identifier plus every not-yet-claimed descendant
/// identifier, making a general entry (`da`) the fallback for all of its
/// unlisted regional variants. The neutral catch-all case is appended by
/// the emitter.
pub fn build_lookup(defined: &[DefinedCulture]) -> Vec<LookupCase> {
    let mut claimed: HashSet<u32> = HashSet::new();
    let mut cases = Vec::new();
    for culture in defined {
        for lcid in std::iter::once(culture.lcid).chain(cultures::descendants_of(culture.lcid).iter().copied())
        {
            if claimed.insert(lcid) {
                cases.push(LookupCase {
                    lcid,
                    source: culture.name.clone(),
                });
            }
        }
    }
    cases
}
