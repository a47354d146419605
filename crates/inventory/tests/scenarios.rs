//! Day-by-day inventory scenarios, driven only through the public API.

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, Category, GildedRose, Item, MAX_QUALITY, SULFURAS,
};

/// Given/when/then helper: one inventory, advanced some days, inspected.
struct Scenario {
    rose: GildedRose,
}

impl Scenario {
    fn given(items: Vec<Item>) -> Self {
        gildedrose_observability::init();
        Self {
            rose: GildedRose::new(items),
        }
    }

    fn given_one(name: &str, sell_in: i64, quality: i64) -> Self {
        Self::given(vec![Item::new(name, sell_in, quality)])
    }

    fn when_days_pass(mut self, days: u32) -> Self {
        self.rose.advance_days(days);
        self
    }

    fn then_item(&self, index: usize, sell_in: i64, quality: i64) -> &Self {
        let item = &self.rose.items()[index];
        assert_eq!(
            (item.sell_in, item.quality),
            (sell_in, quality),
            "unexpected state for {item}"
        );
        self
    }
}

#[test]
fn normal_item_degrades_over_five_days() {
    Scenario::given_one("Normal Item", 10, 20)
        .when_days_pass(5)
        .then_item(0, 5, 15);
}

#[test]
fn normal_item_degrades_twice_as_fast_past_sell_date() {
    Scenario::given_one("Normal Item", 2, 10)
        .when_days_pass(4)
        // 2 days at -1, then 2 days at -2.
        .then_item(0, -2, 4);
}

#[test]
fn normal_item_bottoms_out_at_zero() {
    Scenario::given_one("Normal Item", 1, 3)
        .when_days_pass(10)
        .then_item(0, -9, 0);
}

#[test]
fn conjured_item_follows_normal_rules() {
    assert_eq!(Category::from_name("Conjured Mana Cake"), Category::Normal);
    Scenario::given_one("Conjured Mana Cake", 3, 6)
        .when_days_pass(1)
        .then_item(0, 2, 5);
}

#[test]
fn aged_brie_improves_and_caps_at_fifty() {
    Scenario::given_one(AGED_BRIE, 2, 0)
        .when_days_pass(2)
        .then_item(0, 0, 2);

    Scenario::given_one(AGED_BRIE, 2, 0)
        .when_days_pass(30)
        // 2 days at +1, then 28 days at +2 capped at 50.
        .then_item(0, -28, MAX_QUALITY);
}

#[test]
fn sulfuras_never_changes() {
    Scenario::given_one(SULFURAS, 0, 80)
        .when_days_pass(100)
        .then_item(0, 0, 80);
}

#[test]
fn backstage_pass_lifecycle() {
    Scenario::given_one(BACKSTAGE_PASSES, 11, 20)
        .when_days_pass(1)
        .then_item(0, 10, 21);

    Scenario::given_one(BACKSTAGE_PASSES, 10, 20)
        .when_days_pass(5)
        .then_item(0, 5, 30);

    Scenario::given_one(BACKSTAGE_PASSES, 5, 20)
        .when_days_pass(5)
        .then_item(0, 0, 35);

    Scenario::given_one(BACKSTAGE_PASSES, 5, 20)
        .when_days_pass(6)
        .then_item(0, -1, 0);
}

#[test]
fn mixed_inventory_after_one_day() {
    Scenario::given(vec![
        Item::new("Normal Item", 10, 20),
        Item::new(AGED_BRIE, 5, 10),
        Item::new(SULFURAS, 0, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
    ])
    .when_days_pass(1)
    .then_item(0, 9, 19)
    .then_item(1, 4, 11)
    .then_item(2, 0, 80)
    .then_item(3, 14, 21);
}

#[test]
fn mixed_inventory_after_three_days() {
    Scenario::given(vec![
        Item::new("Normal Item", 10, 20),
        Item::new(AGED_BRIE, 5, 10),
        Item::new(SULFURAS, 0, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
    ])
    .when_days_pass(3)
    .then_item(0, 7, 17)
    .then_item(1, 2, 13)
    .then_item(2, 0, 80)
    .then_item(3, 12, 23);
}

#[test]
fn empty_inventory_advances_without_error() {
    let scenario = Scenario::given(Vec::new()).when_days_pass(3);
    assert!(scenario.rose.is_empty());
    assert_eq!(scenario.rose.days_elapsed(), 3);
}

#[test]
fn validated_inventory_survives_a_long_run() {
    let mut rose = GildedRose::try_new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ])
    .expect("starting inventory is valid");

    for _ in 0..60 {
        rose.advance_one_day();
        rose.check_invariants().expect("bounds hold every day");
    }

    let rendered: Vec<String> = rose.items().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "+5 Dexterity Vest, -50, 0",
            "Aged Brie, -58, 50",
            "Elixir of the Mongoose, -55, 0",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Sulfuras, Hand of Ragnaros, -1, 80",
            "Backstage passes to a TAFKAL80ETC concert, -45, 0",
            "Backstage passes to a TAFKAL80ETC concert, -50, 0",
            "Backstage passes to a TAFKAL80ETC concert, -55, 0",
            "Conjured Mana Cake, -57, 0",
        ]
    );
}
