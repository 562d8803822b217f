use std::fmt;

/// A selectable article option: a `{label, value, class_name?}` record
/// drawn from a fixed set.
pub(crate) trait ArticleOption:
    Copy + Eq + fmt::Debug + fmt::Display + 'static
{
    /// Every member of the option set, in presentation order.
    const ALL: &'static [Self];

    /// Human-readable label shown by selection controls.
    fn label(self) -> &'static str;

    /// Presentation value (font family name, CSS length, hex color).
    fn value(self) -> &'static str;

    /// Optional style class hint attached to the option.
    fn class_name(self) -> Option<&'static str> {
        None
    }
}

macro_rules! article_option {
    (@class $class:literal) => { Some($class) };
    (@class) => { None };
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($label:literal, $value:literal $(, $class:literal)?)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub(crate) enum $name {
            $($variant),+
        }

        impl ArticleOption for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn class_name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => article_option!(@class $($class)?)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

article_option! {
    /// Typeface used for the article body.
    FontFamily {
        OpenSans => ("Open Sans", "Open Sans", "open-sans"),
        Ubuntu => ("Ubuntu", "Ubuntu", "ubuntu"),
        CormorantGaramond => ("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
        DaysOne => ("Days One", "Days One", "days-one"),
        Merriweather => ("Merriweather", "Merriweather", "merriweather"),
        Montserrat => ("Montserrat", "Montserrat", "montserrat"),
    }
}

article_option! {
    /// Body text size.
    FontSize {
        Small => ("18px", "18px"),
        Medium => ("25px", "25px"),
        Large => ("38px", "38px"),
    }
}

article_option! {
    /// Body text color.
    FontColor {
        Black => ("Black", "#000", "font-black"),
        White => ("White", "#fff", "font-white"),
        Gray => ("Gray", "#C4C4C4", "font-gray"),
        Pink => ("Pink", "#FEAFE8", "font-pink"),
        HotPink => ("Hot pink", "#FD24AF", "font-hot-pink"),
        Orange => ("Orange", "#FFC802", "font-orange"),
        Green => ("Green", "#80D994", "font-green"),
        Blue => ("Blue", "#6FC1FD", "font-blue"),
        Purple => ("Purple", "#5F27CD", "font-purple"),
    }
}

article_option! {
    /// Page background color behind the article.
    BackgroundColor {
        White => ("White", "#fff", "bg-white"),
        Black => ("Black", "#000", "bg-black"),
        Gray => ("Gray", "#C4C4C4", "bg-gray"),
        Pink => ("Pink", "#FEAFE8", "bg-pink"),
        Yellow => ("Yellow", "#FFD11A", "bg-yellow"),
        Green => ("Green", "#80D994", "bg-green"),
        Blue => ("Blue", "#6FC1FD", "bg-blue"),
        Purple => ("Purple", "#5F27CD", "bg-purple"),
    }
}

article_option! {
    /// Maximum width of the article column.
    ContentWidth {
        Wide => ("Wide", "1394px", "width-wide"),
        Medium => ("Medium", "700px", "width-medium"),
        Narrow => ("Narrow", "548px", "width-narrow"),
    }
}
