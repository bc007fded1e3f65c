//! Flyweight: a factory caches glyph instances by key, so requesting the
//! same key twice hands back the identical shared instance instead of
//! constructing a new one. Keys outside the closed set 0-3 are rejected.

use std::collections::HashMap;
use std::rc::Rc;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug)]
struct Glyph {
    character: char,
}

#[derive(Default)]
struct GlyphFactory {
    cache: HashMap<u8, Rc<Glyph>>,
}

impl GlyphFactory {
    fn new() -> Self {
        Self::default()
    }

    /// Fetch the glyph for `key`, constructing and caching it on first
    /// request. The construction notice is written only when a glyph is
    /// actually created.
    fn glyph(&mut self, key: u8, out: &mut dyn Reporter) -> Result<Rc<Glyph>, DemoError> {
        if let Some(glyph) = self.cache.get(&key) {
            return Ok(Rc::clone(glyph));
        }

        let character = match key {
            0 => 'A',
            1 => 'B',
            2 => 'C',
            3 => 'D',
            _ => return Err(DemoError::UnknownSymbol { key }),
        };

        out.line(&format!("Symbol {character} created"))?;
        let glyph = Rc::new(Glyph { character });
        self.cache.insert(key, Rc::clone(&glyph));
        Ok(glyph)
    }
}

pub struct FlyweightDemo;

impl Demo for FlyweightDemo {
    fn name(&self) -> &str {
        "flyweight"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut factory = GlyphFactory::new();
        for key in [0, 1, 3, 1, 3, 2] {
            let glyph = factory.glyph(key, out)?;
            out.line(&format!("{key} ==> {}", glyph.character))?;
        }
        Ok(())
    }
}
