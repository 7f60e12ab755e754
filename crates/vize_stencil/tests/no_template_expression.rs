//! End-to-end tests for `tailwindcss/no-template-expression`.
//!
//! Cases mirror the eslint-plugin-tailwindcss rule tests, plus Vue SFC
//! coverage for bindings and script blocks.

use insta::assert_snapshot;
use vize_stencil::{
    format_results, Linter, OutputFormat, Settings, Severity, StencilConfig,
};

/// Source text of every reported expression, comma separated.
fn lint_texts(linter: &Linter, source: &str, filename: &str) -> String {
    let result = linter.lint_file(source, filename);
    assert_eq!(result.warning_count + result.error_count, result.diagnostics.len());
    result
        .diagnostics
        .iter()
        .map(|d| &source[d.start as usize..d.end as usize])
        .collect::<Vec<_>>()
        .join(",")
}

fn helpers() -> Linter {
    Linter::with_settings(
        Settings::default()
            .with_callees(["classnames", "clsx", "ctl", "cns"])
            .with_tags(["tw"]),
    )
}

// =============================================================================
// JSX
// =============================================================================

mod jsx {
    use super::*;

    #[test]
    fn static_class() {
        let source = r#"<div class="flex shrink-0 flex-col">No arbitrary value</div>"#;
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.jsx"), @"");
    }

    #[test]
    fn single_interpolation() {
        let source = "<div class={`w-${dada}`}>Template literal!</div>";
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.jsx"), @"dada");
    }

    #[test]
    fn two_interpolations_in_order() {
        let source = "<div class={`bg-${bg} text-${text}`}>Arbitrary values!</div>";
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.jsx"), @"bg,text");
    }

    #[test]
    fn jsx_in_plain_js_file() {
        let source = "export const Card = () => <div className={`bg-${bg} text-${text}`} />;";
        assert_snapshot!(lint_texts(&Linter::new(), source, "Card.js"), @"bg,text");
    }

    #[test]
    fn class_name_conditional() {
        let source = "<p className={on ? `text-${a}` : `bg-${b} p-${c}`} />";
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.tsx"), @"a,b,c");
    }

    #[test]
    fn other_attributes_ignored() {
        let source = "<p style={`w-${a}`} data-class={`x-${b}`} />";
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.jsx"), @"");
    }

    #[test]
    fn custom_class_regex() {
        let config = StencilConfig::from_json(r#"{ "options": { "classRegex": "^tw$" } }"#)
            .unwrap();
        let linter = Linter::with_settings(config.resolve().unwrap());
        let source = "<p tw={`w-${a}`} className={`h-${b}`} />";
        assert_snapshot!(lint_texts(&linter, source, "a.jsx"), @"a");
    }
}

// =============================================================================
// Callees and tags
// =============================================================================

mod callees {
    use super::*;

    #[test]
    fn ctl_multiline() {
        let source = "ctl(`
        text-${text}
        container
        flex
        bg-${bg}
        w-12
        sm:w-6
        lg:w-4
      `)";
        assert_snapshot!(lint_texts(&helpers(), source, "a.js"), @"text,bg");
    }

    #[test]
    fn cns_inside_class_name() {
        let source = r#"
      <nav
        className={cns("flex relative flex-row rounded-lg select-none", {
          "bg-gray-200 p-1": !size,
          [`h-${width}`]: size === "sm",
        })}
      />"#;
        let linter = Linter::with_settings(Settings::default().with_callees(["cns"]));
        assert_snapshot!(lint_texts(&linter, source, "a.jsx"), @"width");
    }

    #[test]
    fn classnames_nested() {
        let source = "
      classnames(
        [`flex text-${text}`],
        myFlag && [
          `w-${width}`,
          someBoolean ? [`bg-${bg}`] : { [`h-${width}`]: someOtherFlag },
        ]
      );";
        assert_snapshot!(lint_texts(&helpers(), source, "a.js"), @"text,width,bg,width");
    }

    #[test]
    fn unconfigured_callee_ignored() {
        let source = "classnames(`w-${width}`); cx(`h-${height}`);";
        assert_snapshot!(lint_texts(&Linter::new(), source, "a.js"), @"");
    }

    #[test]
    fn member_callee_ignored() {
        let source = "utils.classnames(`w-${width}`);";
        assert_snapshot!(lint_texts(&helpers(), source, "a.js"), @"");
    }

    #[test]
    fn tagged_template() {
        let source = "const button = tw`px-4 bg-${color}-500`;\nconst other = css`w-${w}`;";
        assert_snapshot!(lint_texts(&helpers(), source, "a.ts"), @"color");
    }

    #[test]
    fn nested_calls_each_reported_once() {
        let source = "clsx(`a-${a}`, cns(`b-${b}`))";
        assert_snapshot!(lint_texts(&helpers(), source, "a.js"), @"a,b");
    }
}

// =============================================================================
// Vue
// =============================================================================

mod vue {
    use super::*;

    const SFC: &str = r#"<script setup lang="ts">
import { computed } from 'vue'

const props = defineProps<{ size: number; tone: string }>()
const badge = computed(() => classnames('rounded', `bg-${props.tone}`))
</script>

<template>
  <div class="flex items-center" :class="[`w-${props.size}`, { 'p-2': dense }]">
    <!-- <span :class="`ignored-${x}`" /> -->
    <span v-bind:class="badge">{{ `text-${notAClass}` }}</span>
    <template v-if="wide">
      <i :class="wide ? `h-${h}` : 'h-1'" />
    </template>
  </div>
</template>

<style scoped>
.flex { display: flex }
</style>
"#;

    #[test]
    fn sfc_bindings_and_script() {
        assert_snapshot!(lint_texts(&helpers(), SFC, "Badge.vue"), @"props.tone,props.size,h");
    }

    #[test]
    fn entity_encoded_binding() {
        let sfc = r#"<template>
  <div :class="[&quot;flex&quot;, `w-${w}`]"></div>
</template>"#;
        assert_snapshot!(lint_texts(&Linter::new(), sfc, "Entity.vue"), @"w");
    }

    #[test]
    fn loose_script_close_tag() {
        let sfc = "<SCRIPT>const c = tw`p-${p}`</SCRIPT >\n<template><i :class=\"`w-${w}`\" /></template>";
        assert_snapshot!(lint_texts(&helpers(), sfc, "Loose.vue"), @"p,w");
    }

    #[test]
    fn sfc_json_positions() {
        let linter = helpers().with_severity(Severity::Error);
        let result = linter.lint_file(SFC, "Badge.vue");
        assert_eq!(result.error_count, 3);

        let sources = vec![("Badge.vue".to_string(), SFC.to_string())];
        let output = format_results(&[result], &sources, OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let positions: Vec<String> = json[0]["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| format!("{}:{}", m["line"], m["column"]))
            .collect();
        assert_snapshot!(positions.join(" "), @"5:58 9:48 13:30");
    }
}
