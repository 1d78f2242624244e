/// A renderable piece of markup with the space it occupies along the layout axis.
///
/// Absent fragments are modelled as `None` by callers of [`flex_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub markup: String,
    pub width: f32,
}

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            width: 0.0,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placed<'a> {
    pub fragment: &'a Fragment,
    pub offset: f32,
}

/// Computes the offset of every present fragment.
///
/// Each fragment starts after the advance of all earlier present fragments
/// plus one `gap` per earlier fragment. `None` entries take no space.
pub fn arrange(items: &[Option<Fragment>], gap: f32) -> Vec<Placed<'_>> {
    let mut placed = Vec::with_capacity(items.len());
    let mut cursor = 0.0f32;
    for fragment in items.iter().flatten() {
        placed.push(Placed {
            fragment,
            offset: cursor,
        });
        cursor += fragment.width + gap;
    }
    placed
}

/// Wraps each present fragment in a translated group.
pub fn flex_layout(items: &[Option<Fragment>], gap: f32, direction: FlexDirection) -> Vec<String> {
    arrange(items, gap)
        .into_iter()
        .map(|placed| {
            let offset = fmt_num(placed.offset);
            let transform = match direction {
                FlexDirection::Row => format!("translate({offset}, 0)"),
                FlexDirection::Column => format!("translate(0, {offset})"),
            };
            format!(
                "<g transform=\"{transform}\">{}</g>",
                placed.fragment.markup
            )
        })
        .collect()
}

/// Formats a coordinate without a trailing `.0` for whole numbers.
pub fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(items: &[Option<Fragment>], gap: f32) -> Vec<f32> {
        arrange(items, gap).iter().map(|p| p.offset).collect()
    }

    #[test]
    fn first_fragment_starts_at_zero() {
        let items = [Some(Fragment::new("a").with_width(10.0))];
        assert_eq!(offsets(&items, 65.0), vec![0.0]);
    }

    #[test]
    fn absent_items_take_no_space() {
        let a = Fragment::new("a").with_width(12.0);
        let b = Fragment::new("b").with_width(7.0);
        let with_gap = offsets(&[Some(a.clone()), None, Some(b.clone())], 65.0);
        let without = offsets(&[Some(a), Some(b)], 65.0);
        assert_eq!(with_gap, vec![0.0, 77.0]);
        assert_eq!(with_gap, without);
    }

    #[test]
    fn offsets_accumulate_widths_and_gaps() {
        let items = [
            Some(Fragment::new("a").with_width(10.0)),
            Some(Fragment::new("b").with_width(20.0)),
            Some(Fragment::new("c")),
        ];
        assert_eq!(offsets(&items, 5.0), vec![0.0, 15.0, 40.0]);
    }

    #[test]
    fn all_absent_renders_nothing() {
        let items: [Option<Fragment>; 2] = [None, None];
        assert!(flex_layout(&items, 65.0, FlexDirection::Row).is_empty());
    }

    #[test]
    fn row_and_column_transforms() {
        let items = [Some(Fragment::new("<a/>")), Some(Fragment::new("<b/>"))];
        assert_eq!(
            flex_layout(&items, 65.0, FlexDirection::Row),
            vec![
                "<g transform=\"translate(0, 0)\"><a/></g>",
                "<g transform=\"translate(65, 0)\"><b/></g>",
            ]
        );
        assert_eq!(
            flex_layout(&items, 20.0, FlexDirection::Column)[1],
            "<g transform=\"translate(0, 20)\"><b/></g>"
        );
    }

    #[test]
    fn fmt_num_trims_fractions() {
        assert_eq!(fmt_num(65.0), "65");
        assert_eq!(fmt_num(32.5), "32.5");
        assert_eq!(fmt_num(-4.0), "-4");
    }
}
