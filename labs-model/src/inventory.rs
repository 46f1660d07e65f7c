use std::fmt;

use ordered_float::OrderedFloat;

/// An item of sports equipment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SportInventory {
    name: String,
    kind: String,
    price: OrderedFloat<f64>,
    weight: OrderedFloat<f64>,
    brand: String,
}

impl SportInventory {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        weight: f64,
        brand: impl Into<String>,
    ) -> Self {
        SportInventory {
            name: name.into(),
            kind: kind.into(),
            price: OrderedFloat(price),
            weight: OrderedFloat(weight),
            brand: brand.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn price(&self) -> f64 {
        self.price.into_inner()
    }

    pub fn weight(&self) -> f64 {
        self.weight.into_inner()
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

impl fmt::Display for SportInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<name={}, type={}, price={:.2}, weight={:.1}, brand={}>",
            self.name,
            self.kind,
            self.price(),
            self.weight(),
            self.brand
        )
    }
}

/// Sort by price, cheapest first; items with the same price go heaviest
/// first.
pub fn sort_catalog(items: &mut [SportInventory]) {
    items.sort_by(|a, b| {
        a.price
            .cmp(&b.price)
            .then_with(|| b.weight.cmp(&a.weight))
    });
}

pub fn find_identical<'a>(
    items: &'a [SportInventory],
    target: &SportInventory,
) -> Option<&'a SportInventory> {
    items.iter().find(|item| *item == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SportInventory> {
        vec![
            SportInventory::new("Ball", "Team", 1200.0, 0.4, "Adidas"),
            SportInventory::new("Dumbbells", "Fitness", 1800.0, 10.0, "Nike"),
            SportInventory::new("Racket", "Tennis", 2500.0, 0.3, "Wilson"),
            SportInventory::new("Helmet", "Cycling", 1800.0, 0.8, "Giro"),
            SportInventory::new("Ball", "Team", 1500.0, 0.4, "Puma"),
        ]
    }

    #[test]
    fn test_sort_catalog() {
        let mut items = catalog();
        sort_catalog(&mut items);
        let names = items.iter().map(|i| i.brand()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Adidas", "Puma", "Nike", "Giro", "Wilson"]);
    }

    #[test]
    fn test_find_identical() {
        let items = catalog();
        let target = SportInventory::new("Racket", "Tennis", 2500.0, 0.3, "Wilson");
        assert_eq!(find_identical(&items, &target), Some(&items[2]));
        let other = SportInventory::new("Racket", "Tennis", 2500.0, 0.31, "Wilson");
        assert_eq!(find_identical(&items, &other), None);
    }

    #[test]
    fn test_display() {
        let ball = SportInventory::new("Ball", "Team", 1200.0, 0.4, "Adidas");
        assert_eq!(
            ball.to_string(),
            "<name=Ball, type=Team, price=1200.00, weight=0.4, brand=Adidas>"
        );
    }
}
