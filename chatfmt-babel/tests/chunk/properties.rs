use chatfmt_babel::chunk::{chunks, split};
use proptest::prelude::*;
use std::num::NonZeroUsize;

proptest! {
    #[test]
    fn parts_concatenate_to_input(text in "\\PC{0,300}", max in 1usize..64) {
        let max_len = NonZeroUsize::new(max).unwrap();
        let parts = split(&text, max_len);
        prop_assert_eq!(parts.concat(), text.as_str());
    }

    #[test]
    fn parts_respect_max_len(text in "\\PC{0,300}", max in 1usize..64) {
        let max_len = NonZeroUsize::new(max).unwrap();
        let parts = split(&text, max_len);

        let count = text.chars().count();
        prop_assert_eq!(parts.len(), count.div_ceil(max).max(1));
        for part in &parts[..parts.len() - 1] {
            prop_assert_eq!(part.chars().count(), max);
        }
        prop_assert!(parts[parts.len() - 1].chars().count() <= max);
    }

    #[test]
    fn iterator_matches_split(text in "\\PC{1,200}", max in 1usize..32) {
        let max_len = NonZeroUsize::new(max).unwrap();
        let lazy: Vec<&str> = chunks(&text, max_len).collect();
        prop_assert_eq!(lazy, split(&text, max_len));
    }
}
