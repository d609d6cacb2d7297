use crate::{NewOrder, OrderItem};

use googletest::prelude::*;

#[test]
fn given_same_batch_timestamp_when_building_lines_then_codes_differ_by_index() {
    let item = OrderItem {
        ingredient_id: 4,
        quantity: 2,
    };

    let first = NewOrder::for_batch(7, 1_700_000_000_000_000_000, 0, item);
    let second = NewOrder::for_batch(7, 1_700_000_000_000_000_000, 1, item);

    assert_that!(first.code, eq("ORD-7-1700000000000000000-0"));
    assert_that!(second.code, eq("ORD-7-1700000000000000000-1"));
    assert_that!(second.restaurant_id, eq(7));
    assert_that!(second.number, eq(2));
}
