//! Trie-pruned depth-first word search over a grid

use super::result::WordResult;
use crate::core::Grid;
use crate::dictionary::{DictionaryIndex, MIN_WORD_LEN, TrieNode};

/// Longest word the finder will follow by default
pub const DEFAULT_MAX_PATH_LEN: usize = 20;

/// Finds every dictionary word reachable in a grid
///
/// Holds a shared reference to the dictionary, so one index can serve any
/// number of finders on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    dictionary: &'a DictionaryIndex,
    max_path_len: usize,
}

impl<'a> WordFinder<'a> {
    /// Create a finder that follows words up to `max_path_len` letters
    #[must_use]
    pub const fn new(dictionary: &'a DictionaryIndex, max_path_len: usize) -> Self {
        Self {
            dictionary,
            max_path_len,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a DictionaryIndex {
        self.dictionary
    }

    /// All words of at least three letters spelled by a simple path of
    /// adjacent cells
    ///
    /// Each origin cell starts a fresh search with its own visited set.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Grid;
    /// use boggle_solver::dictionary::DictionaryIndex;
    /// use boggle_solver::solver::WordFinder;
    ///
    /// let dict = DictionaryIndex::build(["abe", "bf", "cg"]);
    /// let grid = Grid::parse_letters("abcdefghijklmnop").unwrap();
    /// let words = WordFinder::new(&dict, 20).find_words(&grid);
    /// assert_eq!(words.iter().collect::<Vec<_>>(), vec!["abe"]);
    /// ```
    #[must_use]
    pub fn find_words(&self, grid: &Grid) -> WordResult {
        let mut found = WordResult::new();
        let mut visited = vec![false; grid.len()];
        let mut word = String::with_capacity(self.max_path_len);

        for origin in 0..grid.len() {
            visited.fill(false);
            self.search(grid, origin, self.dictionary.root(), &mut word, 0, &mut visited, &mut found);
        }
        found
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        grid: &Grid,
        index: usize,
        node: &TrieNode,
        word: &mut String,
        letters: usize,
        visited: &mut [bool],
        found: &mut WordResult,
    ) {
        let symbol = grid.cell_at(index);
        let letters = letters + symbol.chars().count();
        if letters > self.max_path_len {
            return;
        }
        // A multi-letter symbol must match every edge or the branch dies here
        let Some(next) = node.descend(symbol) else {
            return;
        };

        let mark = word.len();
        word.push_str(symbol);
        visited[index] = true;

        if next.is_word_end() && letters >= MIN_WORD_LEN {
            found.insert(word.clone());
        }
        if letters < self.max_path_len {
            for neighbor in grid.neighbors(index) {
                if !visited[neighbor] {
                    self.search(grid, neighbor, next, word, letters, visited, found);
                }
            }
        }

        visited[index] = false;
        word.truncate(mark);
    }

    /// Cells spelling `word` along a simple adjacent path, if one exists
    ///
    /// Ignores the dictionary; useful for highlighting and for checking that a
    /// placed word really is on the grid.
    #[must_use]
    pub fn path_of(grid: &Grid, word: &str) -> Option<Vec<usize>> {
        let word = word.to_lowercase();
        let mut path = Vec::new();
        let mut visited = vec![false; grid.len()];
        (0..grid.len()).find_map(|origin| {
            trace(grid, origin, &word, &mut visited, &mut path).then(|| path.clone())
        })
    }
}

/// Convenience wrapper over [`WordFinder::find_words`]
#[must_use]
pub fn find_words(grid: &Grid, dictionary: &DictionaryIndex, max_path_len: usize) -> WordResult {
    WordFinder::new(dictionary, max_path_len).find_words(grid)
}

fn trace(grid: &Grid, index: usize, rest: &str, visited: &mut [bool], path: &mut Vec<usize>) -> bool {
    let Some(rest) = rest.strip_prefix(grid.cell_at(index)) else {
        return false;
    };
    visited[index] = true;
    path.push(index);

    let done = rest.is_empty()
        || grid
            .neighbors(index)
            .any(|n| !visited[n] && trace(grid, n, rest, visited, path));

    if !done {
        path.pop();
    }
    visited[index] = false;
    done
}
