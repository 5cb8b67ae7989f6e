//! Splitting a class token into its variant path and base class.

/// One separator-delimited class token.
///
/// `hover:lg:bg-red-500` has the variants `["hover", "lg"]` and the base
/// class `bg-red-500`. Variants keep their source order.
///
/// # Examples
/// ```
/// use headwind::ClassToken;
/// let token = ClassToken::parse("hover:lg:bg-red-500");
/// assert_eq!(token.variants(), ["hover", "lg"]);
/// assert_eq!(token.base_class_name(), "bg-red-500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'t> {
    original: &'t str,
    variants: Vec<&'t str>,
    base: &'t str,
}

impl<'t> ClassToken<'t> {
    /// Split `token` on `:`. Every segment but the last is a variant.
    #[must_use]
    pub fn parse(token: &'t str) -> Self {
        let (variants, base) = token.rsplit_once(':').map_or_else(
            || (Vec::new(), token),
            |(path, base)| (path.split(':').collect(), base),
        );
        Self {
            original: token,
            variants,
            base,
        }
    }

    /// The token exactly as written.
    #[must_use]
    pub fn original(&self) -> &'t str {
        self.original
    }

    /// Variant names, outermost first.
    #[must_use]
    pub fn variants(&self) -> &[&'t str] {
        &self.variants
    }

    /// The final colon-delimited segment.
    #[must_use]
    pub fn base_class_name(&self) -> &'t str {
        self.base
    }

    /// Whether the token carries at least one variant.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("flex", &[], "flex")]
    #[case("md:flex", &["md"], "flex")]
    #[case("dark:hover:lg:bg-red-500", &["dark", "hover", "lg"], "bg-red-500")]
    #[case("", &[], "")]
    #[case(":flex", &[""], "flex")]
    fn splits_variants_from_base(
        #[case] token: &str,
        #[case] variants: &[&str],
        #[case] base: &str,
    ) {
        let parsed = ClassToken::parse(token);
        assert_eq!(parsed.original(), token);
        assert_eq!(parsed.variants(), variants);
        assert_eq!(parsed.base_class_name(), base);
        assert_eq!(parsed.has_variants(), !variants.is_empty());
    }
}
