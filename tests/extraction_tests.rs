use indoc::indoc;
use legacylens::extraction::{
    extract, FunctionExtractor, Strategy as ExtractionStrategy, StructuralExtractor,
    TextualExtractor,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "print", "raise", "return", "try", "while",
    "with", "yield", "match", "case", "type",
];

#[test]
fn test_realistic_module_structural() {
    let source = indoc! {r#"
        import os

        class Repository(object):
            def __init__(self, root):
                self.root = root

            @property
            def name(self):
                return os.path.basename(self.root)

            @staticmethod
            def discover(path):
                def walk_up(p):
                    return os.path.dirname(p)
                return walk_up(path)

        if os.name == "nt":
            def normalize(p):
                return p.replace("\\", "/")
        else:
            def normalize(p):
                return p

        async def fetch(url):
            return url

        handler = lambda event: event
    "#};

    let result = extract(source);
    assert_eq!(result.strategy, ExtractionStrategy::Structural);
    assert_eq!(
        result.functions,
        vec![
            "__init__",
            "name",
            "discover",
            "walk_up",
            "normalize",
            "normalize",
            "fetch"
        ]
    );
}

#[test]
fn test_broken_module_falls_back_with_same_names() {
    let source = indoc! {r#"
        class Legacy:
            def keep(self):
                return 1

            def broken(self:
                pass

        @app.route("/",
                   methods=["GET"])
        def index():
            return "ok"
    "#};

    let result = extract(source);
    assert_eq!(result.strategy, ExtractionStrategy::Textual);
    assert_eq!(result.functions, vec!["keep", "broken", "index"]);
    assert!(result.fallback_reason.is_some());
}

#[test]
fn test_unclosed_decorator_bracket_keeps_every_function() {
    let result = extract(
        "@retry(times=3\ndef fetch(url):\n    pass\n\ndef save(x):\n    pass\n\ndef load(y):\n    pass\n",
    );
    assert_eq!(result.strategy, ExtractionStrategy::Textual);
    assert_eq!(result.functions, vec!["fetch", "save", "load"]);
}

#[test]
fn test_bracket_in_decorator_string_does_not_swallow_definitions() {
    let result = extract("@route(\"/a(\")\ndef index():\n    pass\ndef other():\n    pass\nx = (\n");
    assert_eq!(result.strategy, ExtractionStrategy::Textual);
    assert_eq!(result.functions, vec!["index", "other"]);
}

#[test]
fn test_extractors_report_their_strategy() {
    assert_eq!(StructuralExtractor.strategy(), ExtractionStrategy::Structural);
    assert_eq!(TextualExtractor.strategy(), ExtractionStrategy::Textual);
}

#[test]
fn test_textual_extractor_never_fails() {
    let result = TextualExtractor.extract("def (:\n))))\n").unwrap();
    assert!(result.is_empty());
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}".prop_filter("python keyword", |name| {
        !PYTHON_KEYWORDS.contains(&name.as_str())
    })
}

proptest! {
    #[test]
    fn prop_strategies_agree_on_well_formed_source(
        functions in prop::collection::vec(identifier(), 0..8),
        methods in prop::collection::vec(identifier(), 0..5),
    ) {
        let mut source = String::new();
        for name in &functions {
            source.push_str(&format!("def {}(a, b=1):\n    return a\n\n", name));
        }
        source.push_str("class Holder:\n    x = 1\n");
        for name in &methods {
            source.push_str(&format!("    def {}(self):\n        pass\n", name));
        }

        let structural = StructuralExtractor.extract(&source).unwrap();
        let textual = TextualExtractor.extract(&source).unwrap();

        let mut expected = functions.clone();
        expected.extend(methods.iter().cloned());
        prop_assert_eq!(&structural, &expected);
        prop_assert_eq!(&textual, &expected);
    }
}
