// src/domain/movie/assembly.rs
//
// Aggregate assembly from flattened join rows
//
// The movie details query LEFT-JOINs three one-to-many relations in a
// single round trip, which fans the result out as a Cartesian product:
// a movie with G genres, A actors and K awards comes back as
// max(G,1) * max(A,1) * max(K,1) rows. Folding those rows back into
// one aggregate, dropping the multiplicative duplicates, happens
// here, client-side.

use std::collections::HashSet;

use super::entity::{Movie, MovieRecord};
use crate::domain::{Actor, Award, Genre};
use crate::error::{AppError, AppResult};

/// One row of the movie details join result.
///
/// Pairs the movie's scalar columns with at most one genre, one actor
/// and one award. A child field is `None` when the movie has no rows
/// on that relation; a movie with no children at all still produces
/// exactly one all-`None` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRow {
    pub movie: MovieRecord,
    pub genre: Option<Genre>,
    pub actor: Option<Actor>,
    pub award: Option<Award>,
}

/// Fold a sequence of join rows into a single movie aggregate.
///
/// Rows are grouped by movie id and only the first group encountered
/// is returned; callers are expected to supply rows for one movie.
/// Scalar fields are taken from the group's first row. Children are
/// collected across the whole group: absent entries are skipped and
/// duplicates are dropped by child id, preserving first-seen order.
///
/// Fails with `AppError::NotFound` on empty input.
pub fn assemble_movie(rows: Vec<JoinRow>) -> AppResult<Movie> {
    let mut rows = rows.into_iter();
    let first = rows.next().ok_or(AppError::NotFound)?;

    let mut movie = Movie::from_record(first.movie.clone());
    let mut seen = SeenChildren::default();
    fold_children(&mut movie, &mut seen, first);

    for row in rows {
        // Rows of other movies are ignored; stray rows of the first
        // movie are still folded in, wherever they appear.
        if row.movie.id != movie.id {
            continue;
        }
        fold_children(&mut movie, &mut seen, row);
    }

    Ok(movie)
}

/// Child ids already present in the aggregate
#[derive(Default)]
struct SeenChildren {
    genres: HashSet<i64>,
    actors: HashSet<i64>,
    awards: HashSet<i64>,
}

fn fold_children(movie: &mut Movie, seen: &mut SeenChildren, row: JoinRow) {
    if let Some(genre) = row.genre {
        if seen.genres.insert(genre.id) {
            movie.genres.push(genre);
        }
    }
    if let Some(actor) = row.actor {
        if seen.actors.insert(actor.id) {
            movie.actors.push(actor);
        }
    }
    if let Some(award) = row.award {
        if seen.awards.insert(award.id) {
            movie.awards.push(award);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64) -> MovieRecord {
        MovieRecord {
            id,
            title: "John Wick".to_string(),
            director: "Chad Stahelski".to_string(),
            duration: 101,
            release_date: NaiveDate::from_ymd_opt(2014, 10, 29).unwrap(),
            rate: 91,
        }
    }

    fn genre(id: i64, name: &str) -> Genre {
        Genre::new(id, name.to_string())
    }

    fn actor(id: i64, name: &str) -> Actor {
        Actor::new(
            id,
            name.to_string(),
            "Male".to_string(),
            NaiveDate::from_ymd_opt(1964, 9, 2).unwrap(),
        )
    }

    fn award(id: i64, name: &str, movie_id: i64) -> Award {
        Award::new(id, name.to_string(), 2015, movie_id)
    }

    fn row(
        movie_id: i64,
        g: Option<Genre>,
        a: Option<Actor>,
        aw: Option<Award>,
    ) -> JoinRow {
        JoinRow {
            movie: record(movie_id),
            genre: g,
            actor: a,
            award: aw,
        }
    }

    #[test]
    fn test_empty_input_is_not_found() {
        let result = assemble_movie(Vec::new());
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_all_null_row_yields_empty_collections() {
        // A movie with no relations still joins to exactly one row
        let movie = assemble_movie(vec![row(1, None, None, None)]).unwrap();

        assert_eq!(movie.id, 1);
        assert!(movie.genres.is_empty());
        assert!(movie.actors.is_empty());
        assert!(movie.awards.is_empty());
    }

    #[test]
    fn test_scalar_fields_come_from_first_row() {
        let movie = assemble_movie(vec![row(1, Some(genre(1, "Action")), None, None)]).unwrap();

        assert_eq!(movie.record(), record(1));
    }

    #[test]
    fn test_two_genres_one_actor_no_awards() {
        // Fan-out: 2 genres x 1 actor x 0 awards = 2 rows, the actor
        // repeated on both
        let rows = vec![
            row(1, Some(genre(1, "Action")), Some(actor(5, "Keanu Reeves")), None),
            row(1, Some(genre(2, "Thriller")), Some(actor(5, "Keanu Reeves")), None),
        ];

        let movie = assemble_movie(rows).unwrap();

        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.actors.len(), 1);
        assert!(movie.awards.is_empty());
        assert_eq!(movie.genres[0].name, "Action");
        assert_eq!(movie.genres[1].name, "Thriller");
        assert_eq!(movie.actors[0].name, "Keanu Reeves");
    }

    #[test]
    fn test_full_cartesian_fan_out_is_deduplicated() {
        // 2 genres x 2 actors x 2 awards = 8 rows
        let genres = [genre(1, "Action"), genre(2, "Thriller")];
        let actors = [actor(5, "Keanu Reeves"), actor(6, "Ian McShane")];
        let awards = [award(10, "Best Stunts", 1), award(11, "Best Sound", 1)];

        let mut rows = Vec::new();
        for g in &genres {
            for a in &actors {
                for aw in &awards {
                    rows.push(row(1, Some(g.clone()), Some(a.clone()), Some(aw.clone())));
                }
            }
        }
        assert_eq!(rows.len(), 8);

        let movie = assemble_movie(rows).unwrap();

        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.actors.len(), 2);
        assert_eq!(movie.awards.len(), 2);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let rows = vec![
            row(1, Some(genre(2, "Thriller")), None, None),
            row(1, Some(genre(1, "Action")), None, None),
            row(1, Some(genre(2, "Thriller")), None, None),
        ];

        let movie = assemble_movie(rows).unwrap();

        let names: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Thriller", "Action"]);
    }

    #[test]
    fn test_only_first_movie_group_is_returned() {
        let rows = vec![
            row(1, Some(genre(1, "Action")), None, None),
            row(2, Some(genre(3, "Drama")), None, None),
            // A stray row of the first movie after the second group
            row(1, Some(genre(2, "Thriller")), None, None),
        ];

        let movie = assemble_movie(rows).unwrap();

        assert_eq!(movie.id, 1);
        assert_eq!(movie.genres.len(), 2);
        assert!(movie.genres.iter().all(|g| g.id != 3));
    }

    #[test]
    fn test_null_children_mixed_with_present_ones() {
        let rows = vec![
            row(1, Some(genre(1, "Action")), None, Some(award(10, "Best Stunts", 1))),
            row(1, None, Some(actor(5, "Keanu Reeves")), None),
        ];

        let movie = assemble_movie(rows).unwrap();

        assert_eq!(movie.genres.len(), 1);
        assert_eq!(movie.actors.len(), 1);
        assert_eq!(movie.awards.len(), 1);
    }
}
