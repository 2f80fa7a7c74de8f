//! macros used by themegen

/// implement [`Validate`](crate::config::validate::Validate) for a config section
///
/// a section either lists rules for its own `Option` fields (unset fields are skipped), or
/// lists the subsections it delegates to with `nest`, whose violations get the subsection
/// name prepended to their path.
///
/// ```ignore
/// validator! { OutputCfg {
///     count: |v: &usize| *v >= 1 => "must be positive",
/// } }
///
/// validator! { ThemegenCfg { nest output, nest logging } }
/// ```
#[macro_export]
macro_rules! validator {
    ($section:ident { $( nest $sub:ident ),* $(,)? }) => {
        impl $crate::config::validate::Validate for $section {
            fn violations(&self) -> Vec<$crate::config::validate::Violation> {
                let mut found = Vec::new();

                $(
                    if let Some(sub) = &self.$sub {
                        found.extend(
                            sub.violations()
                                .into_iter()
                                .map(|v| v.under(stringify!($sub))),
                        );
                    }
                )*

                found
            }
        }
    };

    ($section:ident { $( $field:ident : $rule:expr => $message:literal ),* $(,)? }) => {
        impl $crate::config::validate::Validate for $section {
            fn violations(&self) -> Vec<$crate::config::validate::Violation> {
                let mut found = Vec::new();

                $(
                    if let Some(value) = &self.$field {
                        if !($rule)(value) {
                            found.push($crate::config::validate::Violation::new(
                                stringify!($field),
                                $message,
                            ));
                        }
                    }
                )*

                found
            }
        }
    };
}

/// get the current value of a `section.field` setting, falling back to the built-in default
#[macro_export]
macro_rules! getopt {
    ($section:ident . $field:ident) => {
        $crate::config::instance::get_or_default(|c| {
            c.$section.as_ref().and_then(|sub| sub.$field.clone())
        })
    };
}
