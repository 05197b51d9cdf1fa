/*!
Databases for holding information relevant to building and querying terms.

- The [sort database](sort) holds each sort, and checks the sorts of terms as they are built.
- The [term database](term) holds each term, with at most one instance of any term.

Both databases are owned by a [TermManager](crate::manager::TermManager), and grow only.
*/

pub mod sort;
pub mod term;
