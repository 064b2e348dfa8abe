//! Symbol tables for resolving symbolic addresses.
//!
//! The machine exposes its symbol table (read from the ELF input, or produced by the
//! assembler) through the [`SymbolTable`] trait. [`SymbolMap`] is an owned implementation
//! that can be built from name/address pairs or from the symbol table of an ELF image.

use std::collections::BTreeMap;

use object::{Object, ObjectSymbol, SymbolKind};

/// Name to address lookup.
pub trait SymbolTable {
    /// Returns the address bound to `name`, if any.
    fn resolve(&self, name: &str) -> Option<u32>;
}

/// Owned symbol table keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    symbols: BTreeMap<String, u32>,
}

impl SymbolMap {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the symbol table of a 32-bit ELF image.
    ///
    /// Only named symbols defined by the image are kept: undefined (imported), file and
    /// section symbols are skipped, as are addresses that do not fit in 32 bits.
    ///
    /// # Errors
    ///
    /// Returns the parser error when `data` is not a readable object file.
    pub fn from_elf(data: &[u8]) -> Result<Self, object::Error> {
        let file = object::File::parse(data)?;
        let symbols = file
            .symbols()
            .filter(|symbol| {
                !symbol.is_undefined()
                    && !matches!(symbol.kind(), SymbolKind::File | SymbolKind::Section)
            })
            .filter_map(|symbol| {
                let name = symbol.name().ok().filter(|name| !name.is_empty())?;
                let address = u32::try_from(symbol.address()).ok()?;
                Some((name.to_owned(), address))
            })
            .collect();
        Ok(Self { symbols })
    }

    /// Binds `name` to `address`, returning the previous address if there was one.
    pub fn insert(&mut self, name: impl Into<String>, address: u32) -> Option<u32> {
        self.symbols.insert(name.into(), address)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolTable for SymbolMap {
    fn resolve(&self, name: &str) -> Option<u32> {
        self.symbols.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SymbolMap {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            symbols: iter
                .into_iter()
                .map(|(name, address)| (name.into(), address))
                .collect(),
        }
    }
}
