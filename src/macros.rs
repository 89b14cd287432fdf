macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

macro_rules! rule {
    (@effect) => {
        $crate::PhonemeEffect::Keep
    };
    (@effect $effect:expr) => {
        $effect
    };
    (
        name: $name:expr,
        category: $category:expr,
        duration: $duration:expr,
        attribute: $attribute:expr
        $(, effect: $effect:expr)?
        $(, priority: $priority:expr)?
        , description: $description:expr,
        when: |$window:ident| $body:expr
        $(,)?
    ) => {{
        fn predicate($window: &$crate::engine::Window<'_>) -> bool {
            $body
        }

        $crate::Rule {
            name: $name,
            category: $category,
            duration: $duration,
            attribute: $attribute,
            effect: rule!(@effect $($effect)?),
            priority: { 0 $(+ $priority)? },
            description: $description,
            predicate: predicate as $crate::Predicate,
        }
    }};
}
