// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_portal::theme::{self, TokenValue};
    use iced_portal::ui;

    #[test]
    fn shipped_dictionary_satisfies_every_ui_reference() {
        // Startup validation end to end: every token any component
        // declares must exist in the embedded dictionary with the
        // declared kind.
        let resolver = theme::load().expect("embedded dictionary must validate");
        for (name, _kind) in ui::required_tokens() {
            assert!(
                resolver.dictionary().contains(name),
                "dictionary is missing '{name}'"
            );
        }
    }

    #[test]
    fn spacing_tokens_are_mode_independent() {
        let resolver = theme::load().expect("embedded dictionary must validate");
        for name in ["Spacing8", "Spacing20", "BigRadius", "SmallRadius"] {
            assert_eq!(
                resolver.resolve(name, true),
                resolver.resolve(name, false),
                "'{name}' must not vary with the theme"
            );
        }
    }

    #[test]
    fn surface_colors_flip_between_modes() {
        let resolver = theme::load().expect("embedded dictionary must validate");
        for name in ["Background", "Surface", "MainText", "BackdropColor"] {
            assert_ne!(
                resolver.color(name, true),
                resolver.color(name, false),
                "'{name}' defines a dark variant and must differ by mode"
            );
        }
    }

    #[test]
    fn light_surface_is_lighter_than_dark_surface() {
        let resolver = theme::load().expect("embedded dictionary must validate");
        let light = resolver.color("Surface", false);
        let dark = resolver.color("Surface", true);
        assert!(light.r > dark.r);

        let light_text = resolver.color("MainText", false);
        let dark_text = resolver.color("MainText", true);
        assert!(light_text.r < dark_text.r);
    }

    #[test]
    fn backdrop_inverts_with_the_mode() {
        // Light mode dims with black, dark mode lifts with white.
        let resolver = theme::load().expect("embedded dictionary must validate");
        let light = resolver.color("BackdropColor", false);
        let dark = resolver.color("BackdropColor", true);
        assert!(light.r < 0.5);
        assert!(dark.r > 0.5);

        match resolver.resolve("BackdropOpacity", false) {
            Some(TokenValue::Number(opacity)) => {
                assert!(*opacity > 0.0 && *opacity < 1.0);
            }
            other => panic!("BackdropOpacity should be a ratio, got {other:?}"),
        }
    }

    #[test]
    fn spacing_scale_is_ordered() {
        let resolver = theme::load().expect("embedded dictionary must validate");
        assert!(resolver.length("Spacing8") > resolver.length("Spacing4"));
        assert!(resolver.length("Spacing12") > resolver.length("Spacing8"));
        assert!(resolver.length("Spacing20") > resolver.length("Spacing16"));
        assert!(resolver.length("BigRadius") > resolver.length("SmallRadius"));
    }
}
