#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::*;

    fn actions(list: &[NavAction]) -> AvailableActions {
        list.iter().copied().collect()
    }

    fn resolve(value: Value, layout: &str, available: &[NavAction]) -> Result<NavBar> {
        resolve_str(&value.to_string(), layout, &actions(available))
    }

    #[test]
    fn empty_list_resolves_for_any_layout() {
        for layout in ["left", "top", "", "  "] {
            let bar = resolve_str("[]", layout, &AvailableActions::none()).unwrap();
            assert!(bar.is_empty(), "{layout:?}");
        }
        let bar = resolve_str("[]", "center", &AvailableActions::none()).unwrap();
        assert_eq!(bar.layout_alignment, LayoutAlignment::FlexCenter);
        let bar = resolve_str("[]", "top", &AvailableActions::none()).unwrap();
        assert_eq!(bar.layout_alignment, LayoutAlignment::FlexEnd);
    }

    #[test]
    fn named_forward_button_with_continue() {
        let bar = resolve(
            json!([{"label": "Next", "variant": "blue", "isNextAction": true}]),
            "right",
            &[NavAction::Next],
        )
        .unwrap();
        let button = &bar.buttons[0];
        assert_eq!(button.variant, ButtonVariant::Named(NamedVariant::Brand));
        assert!(!button.is_disabled);
        assert_eq!(button.output_value, "Next");
        assert_eq!(button.style, None);
        assert_eq!(bar.layout_alignment.token(), "flex_end");
    }

    #[test]
    fn hidden_unavailable_button_is_dropped() {
        let bar = resolve(
            json!([{"label": "Next", "variant": "blue", "isNextAction": true, "hideWhenUnavailable": true}]),
            "right",
            &[],
        )
        .unwrap();
        assert!(bar.is_empty());
    }

    #[test]
    fn removal_keeps_order_and_skips_nothing() {
        let bar = resolve(
            json!([
                {"label": "A", "variant": "neutral", "isNextAction": true, "hideWhenUnavailable": true},
                {"label": "B", "variant": "neutral", "isNextAction": true, "hideWhenUnavailable": true},
                {"label": "C", "variant": "neutral"},
                {"label": "D", "variant": "neutral", "isNextAction": true, "hideWhenUnavailable": true},
                {"label": "E", "variant": "neutral", "isNextAction": true},
            ]),
            "left",
            &[NavAction::Back],
        )
        .unwrap();
        let labels: Vec<&str> = bar.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "E"]);
        assert!(!bar.buttons[0].is_disabled);
        assert!(bar.buttons[1].is_disabled);
    }

    #[test]
    fn custom_color_defaults_foregrounds_and_builds_style() {
        let bar = resolve(
            json!([{"label": "Go", "variant": "#1565C0"}]),
            "center",
            &[],
        )
        .unwrap();
        let button = &bar.buttons[0];
        assert_eq!(button.variant.as_str(), "#1565C0");
        assert_eq!(button.label_color.as_ref().map(HexColor::as_str), Some("#fff"));
        assert_eq!(button.icon_color.as_ref().map(HexColor::as_str), Some("#fff"));
        let style = button.style.as_deref().unwrap();
        for property in [
            "--slds-c-button-brand-color-background: #1565C0",
            "--slds-c-button-brand-color-background-hover: #1565C0",
            "--slds-c-button-brand-color-background-active: #1565C0",
            "--slds-c-button-brand-color-border: #1565C0",
            "--slds-c-button-brand-color-border-hover: #1565C0",
            "--slds-c-button-brand-text-color: #fff",
            "--slds-c-icon-color-foreground: #fff",
        ] {
            let needle = format!("{property};");
            let count = style.matches(needle.as_str()).count()
                + usize::from(style.ends_with(property));
            assert_eq!(count, 1, "{property}");
        }
    }

    #[test]
    fn explicit_custom_colors_are_kept() {
        let bar = resolve(
            json!([{"label": "Go", "variant": "#000", "labelColor": "#ABCDEF", "iconColor": "#123"}]),
            "right",
            &[],
        )
        .unwrap();
        let style = bar.buttons[0].style.as_deref().unwrap();
        assert!(style.contains("--slds-c-button-brand-text-color-active: #ABCDEF"));
        assert!(style.ends_with("--slds-c-icon-color-foreground: #123"));
    }

    #[test]
    fn bad_custom_color_names_field_and_value() {
        let err = resolve(
            json!([{"label": "Go", "variant": "#000", "iconColor": "white"}]),
            "right",
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidColor {
                index: 0,
                field: "iconColor",
                value: "white".into()
            }
        );
    }

    #[test]
    fn colors_are_ignored_for_named_variants() {
        let bar = resolve(
            json!([{"label": "Go", "variant": "green", "labelColor": "not-a-color"}]),
            "right",
            &[],
        )
        .unwrap();
        assert_eq!(bar.buttons[0].label_color, None);
        assert_eq!(bar.buttons[0].style, None);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = resolve(json!([{"label": "X", "variant": "neon"}]), "right", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVariantOrColor {
                index: 0,
                value: "neon".into()
            }
        );
        assert!(err.to_string().contains("'neon'"));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        let err = resolve(json!([{"label": "X", "variant": "neutral"}]), "top", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLayoutAlignment {
                value: "top".into()
            }
        );
        let blank = resolve(json!([{"label": "X", "variant": "neutral"}]), " ", &[]).unwrap_err();
        assert!(matches!(blank, Error::InvalidLayoutAlignment { .. }));
    }

    #[test]
    fn icon_requires_alignment() {
        let err = resolve(
            json!([{"label": "X", "variant": "neutral", "icon": "arrow"}]),
            "right",
            &[],
        )
        .unwrap_err();
        assert_eq!(err, Error::MissingIconAlignment { index: 0 });

        let err = resolve(
            json!([{"label": "X", "variant": "neutral", "icon": "arrow", "iconAlignment": " Middle "}]),
            "right",
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIconAlignment {
                index: 0,
                value: "middle".into()
            }
        );
    }

    #[test]
    fn icon_alignment_is_normalized() {
        let bar = resolve(
            json!([{"label": "X", "variant": "neutral", "icon": "arrow", "iconAlignment": " RIGHT "}]),
            "right",
            &[],
        )
        .unwrap();
        assert_eq!(bar.buttons[0].icon_alignment, Some(IconAlignment::Right));
    }

    #[test]
    fn missing_label_or_variant_names_the_field() {
        let err = resolve(json!([{"variant": "blue"}]), "right", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                index: 0,
                field: "label"
            }
        );
        let err = resolve(
            json!([{"label": "A", "variant": "blue"}, {"label": "B", "variant": "   "}]),
            "right",
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                index: 1,
                field: "variant"
            }
        );
    }

    #[test]
    fn first_failure_wins() {
        let err = resolve(
            json!([
                {"label": "A", "variant": "neon"},
                {"label": "", "variant": "blue"},
            ]),
            "right",
            &[],
        )
        .unwrap_err();
        assert_eq!(err.index(), Some(0));
    }

    #[test]
    fn output_value_falls_back_to_trimmed_label() {
        let bar = resolve(
            json!([
                {"label": "  Save  ", "variant": "blue"},
                {"label": "Skip", "variant": "blue", "outputValue": "   "},
                {"label": "Done", "variant": "blue", "outputValue": " done "},
            ]),
            "right",
            &[],
        )
        .unwrap();
        let values: Vec<&str> = bar.buttons.iter().map(|b| b.output_value.as_str()).collect();
        assert_eq!(values, vec!["Save", "Skip", "done"]);
        assert_eq!(bar.buttons[0].label, "Save");
    }

    #[test]
    fn availability_follows_action_family() {
        let list = json!([
            {"label": "Back", "variant": "neutral"},
            {"label": "Next", "variant": "blue", "isNextAction": true},
        ]);
        let finish_only = resolve(list.clone(), "right", &[NavAction::Finish]).unwrap();
        assert!(finish_only.buttons[0].is_disabled);
        assert!(!finish_only.buttons[1].is_disabled);

        let back_only = resolve(list, "right", &[NavAction::Back]).unwrap();
        assert!(!back_only.buttons[0].is_disabled);
        assert!(back_only.buttons[1].is_disabled);
    }

    #[test]
    fn resolved_output_is_a_fixed_point() {
        let available = [NavAction::Next, NavAction::Back];
        let first = resolve(
            json!([
                {"label": "Back", "variant": "Red Outlined", "icon": "x", "iconAlignment": "LEFT"},
                {"label": "Next", "variant": "#1565C0", "isNextAction": true},
            ]),
            "Center",
            &available,
        )
        .unwrap();

        let again = serde_json::to_value(&first.buttons).unwrap();
        let layout = first.layout_alignment.token();
        let second = resolve(again, layout, &available).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let cfg = NavConfig::default();
        let available = actions(&[NavAction::Next]);
        assert_eq!(
            cfg.resolve(&available).unwrap(),
            cfg.resolve(&available).unwrap()
        );
    }

    #[test]
    fn re_resolving_tracks_host_actions() {
        let cfg = NavConfig::default();

        let at_start = cfg.resolve(&actions(&[NavAction::Next])).unwrap();
        let labels: Vec<&str> = at_start.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Next"]);

        let mid_flow = cfg
            .resolve(&actions(&[NavAction::Next, NavAction::Back]))
            .unwrap();
        assert_eq!(mid_flow.len(), 2);
        assert_eq!(mid_flow.buttons[0].icon_alignment, Some(IconAlignment::Left));

        let at_end = cfg.resolve(&actions(&[NavAction::Back])).unwrap();
        assert_eq!(at_end.len(), 2);
        assert!(at_end.buttons[1].is_disabled);
    }

    #[test]
    fn include_line_passes_through() {
        let cfg = NavConfig::new(r#"[{"label": "A", "variant": "blue"}]"#, "left", true).unwrap();
        let bar = cfg.resolve(&AvailableActions::none()).unwrap();
        assert!(bar.include_line);
        let json = serde_json::to_value(&bar).unwrap();
        assert_eq!(json["layoutAlignment"], json!("flex_start"));
        assert_eq!(json["includeLine"], json!(true));
        assert_eq!(json["buttons"][0]["isDisabled"], json!(true));
        assert!(json["buttons"][0].get("style").is_none());
    }

    #[test]
    fn output_is_never_longer_than_input() {
        let list = json!([
            {"label": "A", "variant": "blue", "hideWhenUnavailable": true},
            {"label": "B", "variant": "blue", "isNextAction": true, "hideWhenUnavailable": true},
            {"label": "C", "variant": "#abc"},
        ]);
        for available in [
            vec![],
            vec![NavAction::Next],
            vec![NavAction::Back],
            vec![NavAction::Finish, NavAction::Back],
        ] {
            let bar = resolve(list.clone(), "left", &available).unwrap();
            assert!(bar.len() <= 3);
        }
    }
}
