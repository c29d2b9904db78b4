//! Album use-case service.
//!
//! # Responsibility
//! - Provide album CRUD entry points over the album store.
//! - Build `ExtendAlbum` views by resolving each album's singer.
//!
//! # Invariants
//! - Repository and singer-service errors are returned unchanged.
//! - Extended reads are all-or-nothing: a failed singer lookup discards every
//!   album joined so far.
//! - Singer lookups run one at a time in album order, one per album.

use crate::model::album::{Album, AlbumId};
use crate::model::extend_album::{convert_extend, ExtendAlbum};
use crate::repo::album_repo::AlbumRepository;
use crate::repo::error::RepoResult;
use crate::repo::singer_repo::SingerRepository;
use crate::service::singer_service::SingerService;

/// Album service over an album repository and a shared singer service.
pub struct AlbumService<'svc, A: AlbumRepository, S: SingerRepository> {
    repo: A,
    singer_service: &'svc SingerService<S>,
}

impl<'svc, A: AlbumRepository, S: SingerRepository> AlbumService<'svc, A, S> {
    /// Creates a service from its album store and singer resolver.
    pub fn new(repo: A, singer_service: &'svc SingerService<S>) -> Self {
        Self {
            repo,
            singer_service,
        }
    }

    /// Lists all albums in storage order.
    pub fn list_albums(&self) -> RepoResult<Vec<Album>> {
        self.repo.get_all()
    }

    pub fn get_album(&self, id: AlbumId) -> RepoResult<Album> {
        self.repo.get(id)
    }

    /// Persists `album` as given. No field validation happens here.
    pub fn create_album(&self, album: &Album) -> RepoResult<()> {
        self.repo.add(album)
    }

    /// Deletes one album; a missing id surfaces the repository error.
    pub fn delete_album(&self, id: AlbumId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Gets one album joined with its singer.
    ///
    /// # Contract
    /// - The singer is not looked up when the album fetch fails.
    /// - Either lookup failing returns that error and no view.
    pub fn get_extend_album(&self, id: AlbumId) -> RepoResult<ExtendAlbum> {
        let album = self.repo.get(id)?;
        let singer = self.singer_service.get_singer(album.singer_id)?;
        Ok(convert_extend(album, singer))
    }

    /// Lists every album joined with its singer.
    ///
    /// # Contract
    /// - Output order matches `list_albums`.
    /// - The first singer lookup failure aborts the call; no partial list is
    ///   returned.
    pub fn list_extend_albums(&self) -> RepoResult<Vec<ExtendAlbum>> {
        let albums = self.repo.get_all()?;

        let mut extend_albums = Vec::with_capacity(albums.len());
        for album in albums {
            let singer = self.singer_service.get_singer(album.singer_id)?;
            extend_albums.push(convert_extend(album, singer));
        }

        Ok(extend_albums)
    }
}
