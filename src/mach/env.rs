use super::K;

/// ## Variable memory
///
/// Twenty-six global slots, one per uppercase letter, plus three slots for
/// the reserved function parameters `a`, `b`, `c`. Each slot owns at most
/// one reference. An environment is an ordinary struct threaded through
/// evaluation, so independent interpreter instances can coexist.

#[derive(Debug, Default)]
pub struct Env {
    globals: [Option<K>; 26],
    args: [Option<K>; 3],
}

impl Env {
    pub fn new() -> Env {
        Env::default()
    }

    fn slot(letter: char) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some(letter as usize - 'A' as usize)
        } else {
            None
        }
    }

    /// Slot index of a reserved parameter letter.
    pub fn arg_index(letter: char) -> Option<usize> {
        match letter {
            'a' => Some(0),
            'b' => Some(1),
            'c' => Some(2),
            _ => None,
        }
    }

    /// Stores a new owning reference, releasing whatever the slot held.
    /// Letters outside A-Z are ignored.
    pub fn bind(&mut self, letter: char, value: K) {
        if let Some(slot) = Env::slot(letter) {
            self.globals[slot] = Some(value);
        }
    }

    /// A fresh reference to the bound value, or `None` when unbound.
    pub fn get(&self, letter: char) -> Option<K> {
        Env::slot(letter).and_then(|slot| self.globals[slot].clone())
    }

    pub fn clear(&mut self) {
        for slot in self.globals.iter_mut() {
            *slot = None;
        }
    }

    pub fn arg(&self, index: usize) -> Option<K> {
        self.args.get(index).and_then(|slot| slot.clone())
    }

    /// Rebinds all three argument slots at once, returning the previous
    /// bindings. Callers restore with a second swap, so nested calls see
    /// their own arguments and the caller's come back afterward.
    pub fn swap_args(&mut self, args: [Option<K>; 3]) -> [Option<K>; 3] {
        std::mem::replace(&mut self.args, args)
    }
}
