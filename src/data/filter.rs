use super::model::{Channel, CleanedTable, FilterBounds, FilteredTable};

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Keep the rows whose Depth, ROP and WOB all lie inside `bounds`
/// (inclusive), then derive the temperature gain for each survivor.
///
/// * Row order is preserved.
/// * A missing Depth, ROP or WOB never passes.
/// * Inverted bounds (`min > max`) match nothing.
/// * The gain is missing when either temperature is missing.
pub fn filter(table: &CleanedTable, bounds: &FilterBounds) -> FilteredTable {
    let indices = filtered_indices(table, bounds);

    let temperature_gain = indices
        .iter()
        .map(|&row| temperature_gain(table, row))
        .collect();

    let rows = indices
        .iter()
        .map(|&row| table.rows()[row].clone())
        .collect();

    FilteredTable::new(table.with_rows(rows), temperature_gain)
}

/// Return indices of rows that pass every bound.
pub fn filtered_indices(table: &CleanedTable, bounds: &FilterBounds) -> Vec<usize> {
    (0..table.len())
        .filter(|&row| {
            FilterBounds::FILTERED
                .iter()
                .all(|&channel| bounds.contains(channel, table.value(row, channel)))
        })
        .collect()
}

fn temperature_gain(table: &CleanedTable, row: usize) -> Option<f64> {
    let out = table.value(row, Channel::TempOut)?;
    let inlet = table.value(row, Channel::TempIn)?;
    Some(out - inlet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn columns() -> Vec<String> {
        Channel::LOADED
            .iter()
            .filter_map(|ch| ch.raw_header())
            .map(str::to_string)
            .collect()
    }

    /// Row in `Channel::LOADED` order: depth, temp out, temp in, rop, wob, torque.
    fn row(values: [Option<f64>; 6]) -> Vec<CellValue> {
        values
            .into_iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::Number))
            .collect()
    }

    fn full(depth: f64, out: f64, inlet: f64, rop: f64, wob: f64) -> Vec<CellValue> {
        row([Some(depth), Some(out), Some(inlet), Some(rop), Some(wob), Some(500.0)])
    }

    fn table(rows: Vec<Vec<CellValue>>) -> CleanedTable {
        CleanedTable::new("test", columns(), rows).unwrap()
    }

    fn bounds(depth: (f64, f64), rop: (f64, f64), wob: (f64, f64)) -> FilterBounds {
        FilterBounds {
            min_depth: depth.0,
            max_depth: depth.1,
            min_rop: rop.0,
            max_rop: rop.1,
            min_wob: wob.0,
            max_wob: wob.1,
        }
    }

    fn sample() -> CleanedTable {
        table(vec![
            full(100.0, 150.0, 120.0, 20.0, 15.0),
            full(200.0, 160.0, 110.0, 10.0, 25.0),
            full(300.0, 175.5, 111.25, 35.0, 5.0),
            row([Some(400.0), None, Some(100.0), Some(12.0), Some(18.0), None]),
            row([None, Some(150.0), Some(120.0), Some(20.0), Some(15.0), Some(1.0)]),
        ])
    }

    #[test]
    fn only_rows_inside_bounds_survive() {
        let t = table(vec![
            full(100.0, 150.0, 120.0, 20.0, 15.0),
            full(200.0, 160.0, 110.0, 10.0, 25.0),
        ]);
        let result = filter(&t, &bounds((0.0, 150.0), (0.0, 100.0), (0.0, 100.0)));

        assert_eq!(result.len(), 1);
        assert_eq!(result.value(0, Channel::Depth), Some(100.0));
        assert_eq!(result.value(0, Channel::TemperatureGain), Some(30.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let t = sample();
        let result = filter(&t, &bounds((200.0, 300.0), (10.0, 35.0), (5.0, 25.0)));
        let depths: Vec<_> = (0..result.len())
            .map(|r| result.value(r, Channel::Depth))
            .collect();
        assert_eq!(depths, vec![Some(200.0), Some(300.0)]);
    }

    #[test]
    fn inverted_depth_bounds_yield_nothing() {
        let t = sample();
        let result = filter(&t, &bounds((300.0, 100.0), (-1e9, 1e9), (-1e9, 1e9)));
        assert!(result.is_empty());
    }

    #[test]
    fn missing_depth_never_passes() {
        let t = sample();
        assert_eq!(t.len(), 5);
        assert_eq!(t.value(4, Channel::Depth), None);

        for b in [
            FilterBounds::observed(&t),
            bounds((f64::MIN, f64::MAX), (f64::MIN, f64::MAX), (f64::MIN, f64::MAX)),
        ] {
            let result = filter(&t, &b);
            assert_eq!(result.len(), 4);
            assert!((0..result.len()).all(|r| result.value(r, Channel::Depth).is_some()));
        }
    }

    #[test]
    fn gain_is_exact_difference_or_missing() {
        let t = sample();
        let result = filter(&t, &FilterBounds::observed(&t));

        for r in 0..result.len() {
            let out = result.value(r, Channel::TempOut);
            let inlet = result.value(r, Channel::TempIn);
            let gain = result.value(r, Channel::TemperatureGain);
            match (out, inlet) {
                (Some(o), Some(i)) => assert_eq!(gain, Some(o - i)),
                _ => assert_eq!(gain, None),
            }
        }
        assert_eq!(result.value(2, Channel::TemperatureGain), Some(64.25));
        assert_eq!(result.value(3, Channel::TemperatureGain), None);
    }

    #[test]
    fn observed_bounds_pass_every_complete_row() {
        let t = sample();
        let b = FilterBounds::observed(&t);
        assert_eq!(b.min_depth, 100.0);
        assert_eq!(b.max_depth, 400.0);
        assert_eq!(b.min_wob, 5.0);
        assert_eq!(b.max_wob, 25.0);
        assert_eq!(filtered_indices(&t, &b), vec![0, 1, 2, 3]);
    }

    #[test]
    fn observed_bounds_of_an_empty_channel_are_zero() {
        let t = table(vec![row([None, None, None, None, None, None])]);
        let b = FilterBounds::observed(&t);
        assert_eq!((b.min_rop, b.max_rop), (0.0, 0.0));
        assert!(filter(&t, &b).is_empty());
    }

    #[test]
    fn filtering_never_grows_the_table() {
        let t = sample();
        for b in [
            FilterBounds::observed(&t),
            bounds((150.0, 350.0), (0.0, 30.0), (0.0, 30.0)),
            bounds((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
        ] {
            assert!(filter(&t, &b).len() <= t.len());
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let t = sample();
        let b = bounds((150.0, 450.0), (0.0, 30.0), (0.0, 30.0));
        let once = filter(&t, &b);
        let twice = filter(once.table(), &b);
        assert_eq!(once, twice);
    }

    #[test]
    fn widening_a_bound_never_drops_rows() {
        let t = sample();
        let narrow = bounds((150.0, 250.0), (10.0, 12.0), (15.0, 25.0));
        let base = filter(&t, &narrow).len();
        assert_eq!(base, 1);

        let widened = [
            FilterBounds { min_depth: 0.0, ..narrow },
            FilterBounds { max_depth: 1000.0, ..narrow },
            FilterBounds { min_rop: 0.0, ..narrow },
            FilterBounds { max_rop: 100.0, ..narrow },
            FilterBounds { min_wob: 0.0, ..narrow },
            FilterBounds { max_wob: 100.0, ..narrow },
        ];
        for b in widened {
            assert!(filter(&t, &b).len() >= base, "{b:?}");
        }
    }

    #[test]
    fn relative_order_is_preserved() {
        let t = table(vec![
            full(300.0, 1.0, 0.0, 1.0, 1.0),
            full(100.0, 2.0, 0.0, 1.0, 1.0),
            full(200.0, 3.0, 0.0, 1.0, 1.0),
        ]);
        let result = filter(&t, &FilterBounds::observed(&t));
        let gains: Vec<_> = (0..3)
            .map(|r| result.value(r, Channel::TemperatureGain))
            .collect();
        assert_eq!(gains, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn complete_rows_drop_any_missing_column() {
        let t = sample();
        let result = filter(&t, &FilterBounds::observed(&t));
        let rows = result.complete_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], [100.0, 150.0, 120.0, 30.0, 20.0, 15.0, 500.0]);
    }

    #[test]
    fn depth_profile_pairs_value_with_depth() {
        let t = sample();
        let result = filter(&t, &FilterBounds::observed(&t));
        let profile = result.depth_profile(Channel::TempOut);
        assert_eq!(profile, vec![[150.0, 100.0], [160.0, 200.0], [175.5, 300.0]]);
    }
}
