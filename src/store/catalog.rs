use crate::models::{Hall, Movie};

// Справочник фильмов и залов. Заполняется один раз при старте и дальше
// не меняется, поэтому блокировки не нужны.
#[derive(Debug)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    halls: Vec<Hall>,
}

impl CatalogStore {
    pub fn new(movies: Vec<Movie>, halls: Vec<Hall>) -> Self {
        Self { movies, halls }
    }

    pub fn seed() -> Self {
        Self::new(
            vec![
                Movie {
                    id: 1,
                    title: "Титаник".to_string(),
                    description: "История любви на фоне крушения легендарного лайнера."
                        .to_string(),
                    genres: vec!["драма".to_string(), "мелодрама".to_string()],
                    image_url: "/static/img/titanic.jpg".to_string(),
                },
                Movie {
                    id: 2,
                    title: "Интерстеллар".to_string(),
                    description: "Экспедиция сквозь червоточину в поисках нового дома \
                                  для человечества."
                        .to_string(),
                    genres: vec!["фантастика".to_string(), "драма".to_string()],
                    image_url: "/static/img/interstellar.jpg".to_string(),
                },
            ],
            vec![Hall {
                id: 1,
                name: "Зал 1".to_string(),
                seats_total: 10,
            }],
        )
    }

    pub fn get_movie(&self, id: i64) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn get_hall(&self, id: i64) -> Option<&Hall> {
        self.halls.iter().find(|hall| hall.id == id)
    }

    // Фильмы в порядке добавления
    pub fn list_movies(&self) -> &[Movie] {
        &self.movies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_resolves_by_id() {
        let catalog = CatalogStore::seed();

        assert_eq!(catalog.get_movie(1).unwrap().title, "Титаник");
        assert_eq!(catalog.get_hall(1).unwrap().seats_total, 10);
        assert!(catalog.get_movie(99).is_none());
        assert!(catalog.get_hall(99).is_none());
    }

    #[test]
    fn list_movies_keeps_insertion_order() {
        let catalog = CatalogStore::seed();
        let ids: Vec<i64> = catalog.list_movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
