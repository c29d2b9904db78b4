use discography_core::db::{open_db_in_memory, DbError};
use discography_core::{
    Album, AlbumId, AlbumRepository, AlbumService, ExtendAlbum, RepoError, RepoResult, Singer,
    SingerId, SingerRepository, SingerService, SqliteAlbumRepository, SqliteSingerRepository,
};
use rusqlite::{params, Connection};
use std::cell::RefCell;
use std::collections::HashMap;

fn seed(conn: &Connection, albums: &[Album], singers: &[Singer]) {
    let album_repo = SqliteAlbumRepository::try_new(conn).unwrap();
    let singer_repo = SqliteSingerRepository::try_new(conn).unwrap();
    for singer in singers {
        singer_repo.add(singer).unwrap();
    }
    for album in albums {
        album_repo.add(album).unwrap();
    }
}

/// Singer store that records every lookup it serves.
#[derive(Default)]
struct RecordingSingers {
    singers: HashMap<SingerId, Singer>,
    lookups: RefCell<Vec<SingerId>>,
}

impl RecordingSingers {
    fn with(singers: &[Singer]) -> Self {
        Self {
            singers: singers.iter().map(|s| (s.id, s.clone())).collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    fn lookups(&self) -> Vec<SingerId> {
        self.lookups.borrow().clone()
    }
}

impl SingerRepository for &RecordingSingers {
    fn get_all(&self) -> RepoResult<Vec<Singer>> {
        Ok(self.singers.values().cloned().collect())
    }

    fn get(&self, id: SingerId) -> RepoResult<Singer> {
        self.lookups.borrow_mut().push(id);
        self.singers
            .get(&id)
            .cloned()
            .ok_or(RepoError::SingerNotFound(id))
    }

    fn add(&self, _singer: &Singer) -> RepoResult<()> {
        unimplemented!("not used by join tests")
    }

    fn delete(&self, _id: SingerId) -> RepoResult<()> {
        unimplemented!("not used by join tests")
    }
}

/// Album store whose reads always fail with a storage error.
struct BrokenAlbums;

impl AlbumRepository for BrokenAlbums {
    fn get_all(&self) -> RepoResult<Vec<Album>> {
        Err(RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
    }

    fn get(&self, _id: AlbumId) -> RepoResult<Album> {
        Err(RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
    }

    fn add(&self, _album: &Album) -> RepoResult<()> {
        Ok(())
    }

    fn delete(&self, _id: AlbumId) -> RepoResult<()> {
        Ok(())
    }
}

/// Album store backed by a fixed list, in the given order.
struct FixedAlbums(Vec<Album>);

impl AlbumRepository for FixedAlbums {
    fn get_all(&self) -> RepoResult<Vec<Album>> {
        Ok(self.0.clone())
    }

    fn get(&self, id: AlbumId) -> RepoResult<Album> {
        self.0
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or(RepoError::AlbumNotFound(id))
    }

    fn add(&self, _album: &Album) -> RepoResult<()> {
        Ok(())
    }

    fn delete(&self, _id: AlbumId) -> RepoResult<()> {
        Ok(())
    }
}

#[test]
fn get_extend_album_joins_album_with_singer() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[Album::new(1, "A", 10)], &[Singer::new(10, "X")]);

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    let extended = service.get_extend_album(AlbumId(1)).unwrap();
    assert_eq!(
        extended,
        ExtendAlbum {
            id: AlbumId(1),
            title: "A".to_string(),
            singer: Singer::new(10, "X"),
        }
    );
}

#[test]
fn get_extend_album_reflects_current_singer_state() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[Album::new(1, "A", 10)], &[Singer::new(10, "X")]);

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    assert_eq!(service.get_extend_album(AlbumId(1)).unwrap().singer.name, "X");

    conn.execute(
        "UPDATE singers SET name = ?1 WHERE id = ?2;",
        params!["Renamed", 10],
    )
    .unwrap();

    let second = service.get_extend_album(AlbumId(1)).unwrap();
    assert_eq!(second.singer, singers.get_singer(SingerId(10)).unwrap());
    assert_eq!(second.singer.name, "Renamed");
}

#[test]
fn get_extend_album_missing_album_skips_singer_lookup() {
    let recording = RecordingSingers::with(&[Singer::new(10, "X")]);
    let singers = SingerService::new(&recording);
    let service = AlbumService::new(FixedAlbums(vec![Album::new(1, "A", 10)]), &singers);

    let err = service.get_extend_album(AlbumId(2)).unwrap_err();
    assert!(matches!(err, RepoError::AlbumNotFound(AlbumId(2))));
    assert!(recording.lookups().is_empty());
}

#[test]
fn get_extend_album_propagates_storage_error_unchanged() {
    let recording = RecordingSingers::default();
    let singers = SingerService::new(&recording);
    let service = AlbumService::new(BrokenAlbums, &singers);

    let err = service.get_extend_album(AlbumId(1)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    ));
    assert!(recording.lookups().is_empty());
}

#[test]
fn get_extend_album_missing_singer_returns_singer_not_found() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[Album::new(1, "A", 99)], &[]);

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    let err = service.get_extend_album(AlbumId(1)).unwrap_err();
    assert!(matches!(err, RepoError::SingerNotFound(SingerId(99))));
}

#[test]
fn list_extend_albums_preserves_album_order_and_singers() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        &[
            Album::new(3, "C", 11),
            Album::new(1, "A", 10),
            Album::new(2, "B", 11),
        ],
        &[Singer::new(10, "X"), Singer::new(11, "Y")],
    );

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    let albums = service.list_albums().unwrap();
    let extended = service.list_extend_albums().unwrap();

    assert_eq!(extended.len(), albums.len());
    for (album, view) in albums.iter().zip(&extended) {
        assert_eq!(view.id, album.id);
        assert_eq!(view.title, album.title);
        assert_eq!(view.singer.id, album.singer_id);
    }
}

#[test]
fn list_extend_albums_on_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    assert!(service.list_extend_albums().unwrap().is_empty());
}

#[test]
fn list_extend_albums_fails_whole_call_on_missing_singer() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        &[Album::new(1, "A", 10), Album::new(2, "B", 99)],
        &[Singer::new(10, "X")],
    );

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    let result = service.list_extend_albums();
    assert!(matches!(
        result,
        Err(RepoError::SingerNotFound(SingerId(99)))
    ));
}

#[test]
fn list_extend_albums_stops_at_first_failed_lookup() {
    let recording = RecordingSingers::with(&[Singer::new(10, "X"), Singer::new(12, "Z")]);
    let singers = SingerService::new(&recording);
    let service = AlbumService::new(
        FixedAlbums(vec![
            Album::new(1, "A", 10),
            Album::new(2, "B", 99),
            Album::new(3, "C", 12),
        ]),
        &singers,
    );

    let err = service.list_extend_albums().unwrap_err();
    assert!(matches!(err, RepoError::SingerNotFound(SingerId(99))));
    assert_eq!(recording.lookups(), vec![SingerId(10), SingerId(99)]);
}

#[test]
fn list_extend_albums_looks_up_singer_once_per_album_without_caching() {
    let recording = RecordingSingers::with(&[Singer::new(10, "X")]);
    let singers = SingerService::new(&recording);
    let service = AlbumService::new(
        FixedAlbums(vec![
            Album::new(1, "A", 10),
            Album::new(2, "B", 10),
            Album::new(3, "C", 10),
        ]),
        &singers,
    );

    let extended = service.list_extend_albums().unwrap();
    assert_eq!(extended.len(), 3);
    assert_eq!(recording.lookups(), vec![SingerId(10); 3]);
}

#[test]
fn list_extend_albums_propagates_album_storage_error() {
    let recording = RecordingSingers::default();
    let singers = SingerService::new(&recording);
    let service = AlbumService::new(BrokenAlbums, &singers);

    let err = service.list_extend_albums().unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(recording.lookups().is_empty());
}

#[test]
fn extend_album_serializes_to_id_title_singer() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, &[Album::new(1, "A", 10)], &[Singer::new(10, "X")]);

    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn).unwrap());
    let service = AlbumService::new(SqliteAlbumRepository::try_new(&conn).unwrap(), &singers);

    let json = serde_json::to_value(service.get_extend_album(AlbumId(1)).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "title": "A", "singer": {"id": 10, "name": "X"}})
    );
}
