//! Property tests over randomly generated row streams.

use proptest::prelude::*;
use rowblock_core::{BlockError, IdKind};
use rowblock_store::{RowBlockConfig, RowBlockContainer, UnitBlockContainer};
use rowblock_test_utils::RowGenerator;
use std::io::Cursor;

fn generator(seed: u64, fields: bool, values: bool, extras: usize) -> RowGenerator {
    let mut generator = RowGenerator::new(seed).with_extras(extras);
    if fields {
        generator = generator.with_fields(7);
    }
    if !values {
        generator = generator.without_values();
    }
    generator
}

fn config(extras: usize) -> RowBlockConfig {
    (0..extras).fold(RowBlockConfig::new(), |c, i| c.with_extra(format!("ns{i}")))
}

proptest! {
    #[test]
    fn offsets_stay_aligned_with_entries(seed in any::<u64>(), n in 0usize..40) {
        let mut block = RowBlockContainer::<u32>::new();
        for row in RowGenerator::new(seed).rows(n) {
            block.push(&row.as_row()).unwrap();
            let view = block.get_block();
            prop_assert_eq!(view.offset().len(), block.size() + 1);
            prop_assert_eq!(*view.offset().last().unwrap(), block.nnz());
            prop_assert_eq!(view.label().len(), block.size());
        }
    }

    #[test]
    fn max_index_is_running_maximum(seed in any::<u64>(), n in 1usize..40) {
        let mut block = UnitBlockContainer::<u32>::new();
        let mut generator = RowGenerator::new(seed);
        let mut expected = 0u32;
        for _ in 0..n {
            let row = generator.next_unit_row();
            let before = block.max_index();
            block.push(&row.as_unit_row()).unwrap();
            expected = row.index.iter().copied().fold(expected, u32::max);
            prop_assert_eq!(block.max_index(), expected);
            prop_assert!(block.max_index() >= before);
        }
    }

    #[test]
    fn row_pushes_match_one_batch_push(
        seed in any::<u64>(),
        n in 0usize..30,
        fields in any::<bool>(),
        values in any::<bool>(),
        extras in 0usize..3,
    ) {
        let rows = generator(seed, fields, values, extras).rows(n);

        let mut by_row = RowBlockContainer::<u32>::with_config(config(extras)).unwrap();
        for row in &rows {
            by_row.push(&row.as_row()).unwrap();
        }

        let mut by_batch = RowBlockContainer::<u32>::with_config(config(extras)).unwrap();
        by_batch.push_block(&by_row.get_block()).unwrap();

        prop_assert_eq!(by_batch.get_block(), by_row.get_block());
        prop_assert_eq!(by_batch.max_index(), by_row.max_index());
        prop_assert_eq!(by_batch.max_field(), by_row.max_field());
        for slot in 0..extras {
            let a = by_row.extra(slot).unwrap();
            let b = by_batch.extra(slot).unwrap();
            prop_assert_eq!(a.get_block(), b.get_block());
            prop_assert_eq!(a.max_index(), b.max_index());
        }
    }

    #[test]
    fn split_merge_reassembles_original(seed in any::<u64>(), n in 1usize..30, cut_seed in any::<usize>()) {
        let rows = generator(seed, true, true, 1).rows(n);
        let mut source = RowBlockContainer::<u32>::with_config(config(1)).unwrap();
        for row in &rows {
            source.push(&row.as_row()).unwrap();
        }
        let mut merged = RowBlockContainer::<u32>::with_config(config(1)).unwrap();
        let view = source.get_block();
        let cut = cut_seed % (n + 1);

        merged.push_block(&view.slice(0, cut)).unwrap();
        merged.push_block(&view.slice(cut, n)).unwrap();
        prop_assert_eq!(merged.get_block(), view);
    }

    #[test]
    fn save_load_reproduces_block(seed in any::<u64>(), n in 0usize..30, fields in any::<bool>()) {
        let mut block = RowBlockContainer::<u32>::new();
        for row in generator(seed, fields, true, 0).rows(n) {
            block.push(&row.as_row()).unwrap();
        }
        let mut buf = Vec::new();
        block.save(&mut buf).unwrap();

        let mut loaded = RowBlockContainer::<u32>::new();
        prop_assert!(loaded.load(&mut Cursor::new(buf)).unwrap());
        prop_assert_eq!(loaded.get_block(), block.get_block());
        prop_assert_eq!(loaded.max_index(), block.max_index());
        prop_assert_eq!(loaded.max_field(), block.max_field());
    }

    #[test]
    fn narrowing_merge_is_all_or_nothing(seed in any::<u64>(), n in 1usize..30) {
        let mut wide = RowBlockContainer::<u32>::new();
        for row in RowGenerator::new(seed).with_max_index(400).rows(n) {
            wide.push(&row.as_row()).unwrap();
        }
        let mut narrow = RowBlockContainer::<u8>::new();
        let result = narrow.push_block(&wide.get_block());
        if wide.max_index() > 255 {
            prop_assert_eq!(
                result,
                Err(BlockError::IdOutOfRange {
                    kind: IdKind::Index,
                    value: wide.get_block().index().iter().copied().find(|&i| i > 255).unwrap().into(),
                    max: 255,
                })
            );
            prop_assert!(narrow.is_empty());
            prop_assert_eq!(narrow.nnz(), 0);
            prop_assert_eq!(narrow.mem_cost_bytes(), RowBlockContainer::<u8>::new().mem_cost_bytes());
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(narrow.size(), n);
        }
    }
}
