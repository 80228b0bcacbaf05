//! The [`CatalogStore`] collection state.

use std::collections::HashSet;

use super::error::StoreError;
use crate::model::{seed_movies, CastEdit, Movie, MovieCreate, MovieId};

/// An ordered, immutable snapshot of the movie catalog.
///
/// Mutating operations come in two flavours:
///
/// * **Lenient** (`update_movie`, `delete_movie`, `add_actor`, ...): an absent id or
///   actor name yields an identical copy of the collection. These never fail.
/// * **Checked** (`try_update_movie`, `try_delete_movie`, `try_edit_cast`): the same
///   transformation, but a miss is reported as a [`StoreError`].
///
/// The lenient operations are the checked ones with the error discarded, so both
/// always agree on what a successful change looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    movies: Vec<Movie>,
}

impl CatalogStore {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in seed movies.
    pub fn seeded() -> Self {
        Self {
            movies: seed_movies(),
        }
    }

    /// Builds a catalog from pre-assigned movies, keeping their order.
    ///
    /// # Errors
    /// - [`StoreError::DuplicateId`] if two movies share an id.
    /// - [`StoreError::IdOutOfRange`] if a movie uses `u32::MAX`.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if movie.id.0 == u32::MAX {
                return Err(StoreError::IdOutOfRange(movie.id));
            }
            if !seen.insert(movie.id) {
                return Err(StoreError::DuplicateId(movie.id));
            }
        }
        Ok(Self { movies })
    }

    pub fn list_movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movie(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The id the next created movie will receive: one past the current maximum, or 1.
    ///
    /// Once the maximum is `u32::MAX` the lowest unused id is handed out instead.
    pub fn next_id(&self) -> MovieId {
        let max = self.movies.iter().map(|movie| movie.id.0).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(id) => MovieId(id),
            None => self.lowest_free_id(),
        }
    }

    fn lowest_free_id(&self) -> MovieId {
        let used: HashSet<u32> = self.movies.iter().map(|movie| movie.id.0).collect();
        // A Vec cannot hold u32::MAX movies, so some id below it is free.
        MovieId((1..u32::MAX).find(|id| !used.contains(id)).unwrap_or(0))
    }

    /// Appends a new movie and returns the new collection together with it.
    pub fn create_movie<I, S>(&self, title: impl Into<String>, actors: I) -> (Self, Movie)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let movie = Movie::new(self.next_id(), title, actors);
        let mut movies = self.movies.clone();
        movies.push(movie.clone());
        (Self { movies }, movie)
    }

    pub fn create(&self, params: MovieCreate) -> (Self, Movie) {
        self.create_movie(params.title, params.actors)
    }

    pub fn try_update_movie(
        &self,
        id: MovieId,
        title: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let title = title.into();
        self.replace_movie(id, |movie| Ok(Movie { title, ..movie.clone() }))
    }

    pub fn update_movie(&self, id: MovieId, title: impl Into<String>) -> Self {
        self.try_update_movie(id, title)
            .unwrap_or_else(|_| self.clone())
    }

    pub fn try_delete_movie(&self, id: MovieId) -> Result<Self, StoreError> {
        if !self.contains(id) {
            return Err(StoreError::MovieNotFound(id));
        }
        Ok(Self {
            movies: self
                .movies
                .iter()
                .filter(|movie| movie.id != id)
                .cloned()
                .collect(),
        })
    }

    pub fn delete_movie(&self, id: MovieId) -> Self {
        self.try_delete_movie(id).unwrap_or_else(|_| self.clone())
    }

    /// Applies a [`CastEdit`] to one movie's actor list.
    pub fn try_edit_cast(&self, movie_id: MovieId, edit: &CastEdit) -> Result<Self, StoreError> {
        self.replace_movie(movie_id, |movie| {
            let actors = edit.apply_to(movie)?;
            Ok(Movie {
                actors,
                ..movie.clone()
            })
        })
    }

    pub fn edit_cast(&self, movie_id: MovieId, edit: &CastEdit) -> Self {
        self.try_edit_cast(movie_id, edit)
            .unwrap_or_else(|_| self.clone())
    }

    pub fn add_actor(&self, movie_id: MovieId, name: impl Into<String>) -> Self {
        self.edit_cast(movie_id, &CastEdit::Add(name.into()))
    }

    /// Renames every actor called `old_name` in the movie.
    pub fn update_actor(
        &self,
        movie_id: MovieId,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        self.edit_cast(
            movie_id,
            &CastEdit::Rename {
                from: old_name.into(),
                to: new_name.into(),
            },
        )
    }

    /// Removes every actor called `name` from the movie.
    pub fn remove_actor(&self, movie_id: MovieId, name: impl Into<String>) -> Self {
        self.edit_cast(movie_id, &CastEdit::Remove(name.into()))
    }

    pub fn update_actor_at(
        &self,
        movie_id: MovieId,
        index: usize,
        new_name: impl Into<String>,
    ) -> Self {
        self.edit_cast(
            movie_id,
            &CastEdit::RenameAt {
                index,
                to: new_name.into(),
            },
        )
    }

    pub fn remove_actor_at(&self, movie_id: MovieId, index: usize) -> Self {
        self.edit_cast(movie_id, &CastEdit::RemoveAt(index))
    }

    fn replace_movie<F>(&self, id: MovieId, change: F) -> Result<Self, StoreError>
    where
        F: FnOnce(&Movie) -> Result<Movie, StoreError>,
    {
        let position = self
            .movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or(StoreError::MovieNotFound(id))?;
        let replacement = change(&self.movies[position])?;
        let mut movies = self.movies.clone();
        movies[position] = replacement;
        Ok(Self { movies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(store: &CatalogStore) -> Vec<u32> {
        store.list_movies().iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let store = CatalogStore::seeded();
        let (next, dune) = store.create_movie("Dune", Vec::<String>::new());

        assert_eq!(dune.id, MovieId(3));
        assert!(dune.actors.is_empty());
        assert_eq!(next.list_movies().last(), Some(&dune));
        assert_eq!(next.len(), store.len() + 1);
        // the previous state is untouched
        assert_eq!(store, CatalogStore::seeded());
    }

    #[test]
    fn test_create_on_empty_starts_at_one() {
        let (store, movie) = CatalogStore::new().create_movie("", ["Nobody"]);
        assert_eq!(movie.id, MovieId(1));
        assert_eq!(movie.title, "");
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_create_uses_max_not_count() {
        let store = CatalogStore::from_movies(vec![
            Movie::new(MovieId(9), "Alien", ["Sigourney Weaver"]),
            Movie::new(MovieId(4), "Aliens", Vec::<String>::new()),
        ])
        .unwrap();
        let (_, movie) = store.create_movie("Alien 3", Vec::<String>::new());
        assert_eq!(movie.id, MovieId(10));
    }

    #[test]
    fn test_create_never_duplicates_ids() {
        let mut store = CatalogStore::seeded();
        for n in 0..20 {
            store = store.delete_movie(MovieId(n % 3));
            store = store.create_movie(format!("movie {n}"), Vec::<String>::new()).0;
            let mut seen = ids(&store);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), store.len());
        }
    }

    #[test]
    fn test_update_keeps_position_and_actors() {
        let store = CatalogStore::seeded();
        let next = store.update_movie(MovieId(1), "Inception (2010)");

        let movie = &next.list_movies()[0];
        assert_eq!(movie.id, MovieId(1));
        assert_eq!(movie.title, "Inception (2010)");
        assert_eq!(movie.actors, store.list_movies()[0].actors);
        assert_eq!(next.list_movies()[1], store.list_movies()[1]);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let store = CatalogStore::seeded();
        assert_eq!(store.update_movie(MovieId(42), "Nope"), store);
        assert_eq!(
            store.try_update_movie(MovieId(42), "Nope"),
            Err(StoreError::MovieNotFound(MovieId(42)))
        );
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = CatalogStore::seeded();
        let next = store.delete_movie(MovieId(1));
        assert_eq!(ids(&next), vec![2]);

        let unchanged = store.delete_movie(MovieId(99));
        assert_eq!(unchanged.len(), store.len());
        assert_eq!(unchanged, store);
    }

    #[test]
    fn test_add_actor_appends_to_that_movie_only() {
        let store = CatalogStore::seeded();
        let next = store.add_actor(MovieId(2), "Gary Oldman");

        assert_eq!(
            next.movie(MovieId(2)).unwrap().actors.last().map(String::as_str),
            Some("Gary Oldman")
        );
        assert_eq!(next.movie(MovieId(1)), store.movie(MovieId(1)));
        assert_eq!(store.add_actor(MovieId(5), "Ghost"), store);
    }

    #[test]
    fn test_update_actor_renames_all_matches() {
        let store = CatalogStore::seeded()
            .add_actor(MovieId(1), "Leonardo DiCaprio")
            .update_actor(MovieId(1), "Leonardo DiCaprio", "Tom Hardy");

        assert_eq!(
            store.movie(MovieId(1)).unwrap().actors,
            vec!["Tom Hardy", "Joseph Gordon-Levitt", "Tom Hardy"]
        );
    }

    #[test]
    fn test_update_actor_missing_name_is_noop() {
        let store = CatalogStore::seeded();
        assert_eq!(store.update_actor(MovieId(1), "Nobody", "Somebody"), store);
        assert_eq!(store.update_actor(MovieId(8), "Heath Ledger", "X"), store);
    }

    #[test]
    fn test_remove_actor_is_scoped_to_movie() {
        let store = CatalogStore::seeded()
            .add_actor(MovieId(1), "Michael Caine")
            .add_actor(MovieId(2), "Michael Caine")
            .add_actor(MovieId(2), "Michael Caine");

        let next = store.remove_actor(MovieId(2), "Michael Caine");
        assert_eq!(
            next.movie(MovieId(2)).unwrap().actors,
            vec!["Christian Bale", "Heath Ledger"]
        );
        assert_eq!(next.movie(MovieId(1)), store.movie(MovieId(1)));
    }

    #[test]
    fn test_positional_edits() {
        let store = CatalogStore::seeded().add_actor(MovieId(2), "Christian Bale");

        let renamed = store.update_actor_at(MovieId(2), 2, "Aaron Eckhart");
        assert_eq!(
            renamed.movie(MovieId(2)).unwrap().actors,
            vec!["Christian Bale", "Heath Ledger", "Aaron Eckhart"]
        );

        let removed = store.remove_actor_at(MovieId(2), 0);
        assert_eq!(
            removed.movie(MovieId(2)).unwrap().actors,
            vec!["Heath Ledger", "Christian Bale"]
        );

        assert_eq!(store.remove_actor_at(MovieId(2), 3), store);
    }

    #[test]
    fn test_from_movies_rejects_duplicates() {
        let result = CatalogStore::from_movies(vec![
            Movie::new(MovieId(1), "A", Vec::<String>::new()),
            Movie::new(MovieId(1), "B", Vec::<String>::new()),
        ]);
        assert_eq!(result, Err(StoreError::DuplicateId(MovieId(1))));
    }

    #[test]
    fn test_from_movies_rejects_max_id() {
        let result = CatalogStore::from_movies(vec![Movie::new(
            MovieId(u32::MAX),
            "Overflow",
            Vec::<String>::new(),
        )]);
        assert_eq!(result, Err(StoreError::IdOutOfRange(MovieId(u32::MAX))));
    }

    #[test]
    fn test_create_at_top_of_id_space_reuses_lowest_free_id() {
        let store = CatalogStore::from_movies(vec![
            Movie::new(MovieId(1), "First", Vec::<String>::new()),
            Movie::new(MovieId(u32::MAX - 1), "Almost last", Vec::<String>::new()),
        ])
        .unwrap();

        let (store, last) = store.create_movie("Last", Vec::<String>::new());
        assert_eq!(last.id, MovieId(u32::MAX));

        let (store, wrapped) = store.create_movie("Wrapped", Vec::<String>::new());
        assert_eq!(wrapped.id, MovieId(2));
        assert_eq!(ids(&store), vec![1, u32::MAX - 1, u32::MAX, 2]);
    }

    #[test]
    fn test_dune_scenario() {
        let store = CatalogStore::seeded();
        let (store, dune) = store.create_movie("Dune", Vec::<String>::new());
        assert_eq!(dune.id, MovieId(3));

        let store = store.add_actor(MovieId(3), "Timothée Chalamet");
        assert_eq!(
            store.movie(MovieId(3)).unwrap().actors,
            vec!["Timothée Chalamet"]
        );

        let store = store.delete_movie(MovieId(1));
        assert_eq!(ids(&store), vec![2, 3]);
    }
}
