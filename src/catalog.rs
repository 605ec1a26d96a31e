//! Product catalog keyed by two-key selection codes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Amount;
use crate::model::Product;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid selection code '{0}', expected a row letter A-Z followed by a digit 1-9")]
    InvalidCode(String),
    #[error("duplicate selection code {0}")]
    DuplicateCode(Code),
    #[error("price of {code} must not be negative, got {price}")]
    NegativePrice { code: Code, price: Amount },
}

/// A row letter followed by a column digit, e.g. `A1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    row: char,
    column: char,
}

impl Code {
    pub fn new(row: char, column: char) -> Result<Self, CatalogError> {
        if is_row(row) && is_column(column) {
            Ok(Self { row, column })
        } else {
            Err(CatalogError::InvalidCode(format!("{row}{column}")))
        }
    }

    /// Build a code from keys already known to be a row and a column.
    pub(crate) fn from_keys(row: char, column: char) -> Self {
        debug_assert!(is_row(row) && is_column(column));
        Self { row, column }
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn column(&self) -> char {
        self.column
    }
}

impl FromStr for Code {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(column), None) => Code::new(row, column),
            _ => Err(CatalogError::InvalidCode(s.to_string())),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

/// Keys that select a row.
pub fn is_row(key: char) -> bool {
    key.is_ascii_uppercase()
}

/// Keys that select a column.
pub fn is_column(key: char) -> bool {
    matches!(key, '1'..='9')
}

/// Read-only mapping from selection code to product.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<Code, Product>,
}

impl Catalog {
    /// The factory stock: cola, chips and candy on row A.
    pub fn standard() -> Self {
        let stock = [
            ('1', "cola", 100),
            ('2', "chips", 50),
            ('3', "candy", 65),
        ];
        let products = stock
            .into_iter()
            .map(|(column, name, cents)| {
                (
                    Code::from_keys('A', column),
                    Product::new(name, Amount::from_scaled(cents)),
                )
            })
            .collect();
        Self { products }
    }

    pub fn from_products(
        products: impl IntoIterator<Item = (Code, Product)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for (code, product) in products {
            catalog.insert(code, product)?;
        }
        Ok(catalog)
    }

    /// Stock `product` at `code`; each code holds a single product.
    pub fn insert(&mut self, code: Code, product: Product) -> Result<(), CatalogError> {
        if product.price < Amount::ZERO {
            return Err(CatalogError::NegativePrice {
                code,
                price: product.price,
            });
        }
        if self.products.contains_key(&code) {
            return Err(CatalogError::DuplicateCode(code));
        }
        self.products.insert(code, product);
        Ok(())
    }

    pub fn get(&self, code: &Code) -> Option<&Product> {
        self.products.get(code)
    }
}
