// SPDX-License-Identifier: MPL-2.0
//! UI components: chrome, overlay, pages, and centralized styles.

pub mod chrome;
pub mod overlay;
pub mod pages;
pub mod styles;

use crate::theme::TokenRef;

/// Every token reference the UI declares, aggregated for startup
/// validation of the dictionary.
#[must_use]
pub fn required_tokens() -> Vec<TokenRef> {
    let mut refs = Vec::new();
    refs.extend_from_slice(chrome::REQUIRED_TOKENS);
    refs.extend_from_slice(overlay::REQUIRED_TOKENS);
    refs.extend_from_slice(pages::REQUIRED_TOKENS);
    refs.extend_from_slice(pages::home::REQUIRED_TOKENS);
    refs.extend_from_slice(pages::login::REQUIRED_TOKENS);
    refs.extend_from_slice(pages::profile::REQUIRED_TOKENS);
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_references_cover_every_component() {
        let refs = required_tokens();
        assert!(refs.len() >= chrome::REQUIRED_TOKENS.len() + overlay::REQUIRED_TOKENS.len());
        assert!(refs.iter().any(|(name, _)| *name == "BackdropColor"));
        assert!(refs.iter().any(|(name, _)| *name == "HeaderHeight"));
    }
}
