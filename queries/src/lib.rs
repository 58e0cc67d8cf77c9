use chrono::Utc;
use entities::music;
use entities::music_local_model::MusicModel;
use entities::prelude::Music;
use log::{debug, error};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};

/// Every read, update and delete goes through this: a soft-deleted row is
/// invisible to all of them.
fn live_musics() -> Select<Music> {
    Music::find().filter(music::Column::Deleted.eq(false))
}

pub async fn get_music_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<music::Model>, DbErr> {
    live_musics()
        .filter(music::Column::Id.eq(id))
        .one(conn)
        .await
}

/// Primary key lookup that also returns soft-deleted rows.
pub async fn get_music_by_id_including_deleted<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<music::Model>, DbErr> {
    Music::find_by_id(id).one(conn).await
}

/// One window of live musics in creation order, along with how many live
/// musics exist in total.
pub async fn get_musics_page<C: ConnectionTrait>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<music::Model>, u64), DbErr> {
    let musics = live_musics()
        .order_by_asc(music::Column::Id)
        .offset(Some(offset))
        .limit(Some(limit))
        .all(conn)
        .await?;
    let total = live_musics().count(conn).await?;
    Ok((musics, total))
}

pub async fn add_music<C: ConnectionTrait>(
    conn: &C,
    music: MusicModel,
) -> Result<music::Model, DbErr> {
    let ret = music.into_insert_model(Utc::now()).insert(conn).await;
    match ret {
        Ok(model) => {
            debug!("Inserted music {} with id {}", model.title, model.id);
            Ok(model)
        }
        Err(e) => {
            error!("There was an error inserting a music: {}", e);
            Err(e)
        }
    }
}

/// Inserts all musics in a single transaction, returning them in input order.
pub async fn add_musics<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    musics: Vec<MusicModel>,
) -> Result<Vec<music::Model>, DbErr> {
    let txn = conn.begin().await?;
    let mut inserted = Vec::with_capacity(musics.len());
    for music in musics {
        inserted.push(add_music(&txn, music).await?);
    }
    txn.commit().await?;
    Ok(inserted)
}

/// Overwrites the writable fields of a live music. Returns the number of rows
/// touched, which is 0 when the id is unknown or soft-deleted.
pub async fn update_music<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    music: MusicModel,
) -> Result<u64, DbErr> {
    let ret = Music::update_many()
        .set(music.into_update_model(Utc::now()))
        .filter(music::Column::Id.eq(id))
        .filter(music::Column::Deleted.eq(false))
        .exec(conn)
        .await?;
    debug!("Update of music {} touched {} rows", id, ret.rows_affected);
    Ok(ret.rows_affected)
}

/// Flags a live music as deleted. Returns false when there was nothing to
/// delete; the row itself is kept.
pub async fn soft_delete_music<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let ret = Music::update_many()
        .set(music::ActiveModel {
            deleted: sea_orm::Set(true),
            updated_at: sea_orm::Set(Utc::now()),
            ..Default::default()
        })
        .filter(music::Column::Id.eq(id))
        .filter(music::Column::Deleted.eq(false))
        .exec(conn)
        .await?;
    Ok(ret.rows_affected == 1)
}
