//! CommentRepository 統合テスト
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p blogapi-infra --test comment_repository_test -- --ignored
//! ```

mod common;

use blogapi_domain::{
   blog::BlogId,
   comment::{CommentChanges, CommentId},
};
use blogapi_infra::repository::{CommentRepository, PostgresCommentRepository};
use common::{create_test_comment, test_now_plus};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_find_by_blog_は時系列昇順で返す(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let blog_id = BlogId::new();
   let second = create_test_comment(&blog_id, "second", test_now_plus(20));
   let first = create_test_comment(&blog_id, "first", test_now_plus(10));
   sut.insert(&second).await.unwrap();
   sut.insert(&first).await.unwrap();

   let comments = sut.find_by_blog(&blog_id).await.unwrap();

   assert_eq!(comments, vec![first, second]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_find_by_blog_コメントがなければ空ベクターを返す(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);

   let comments = sut.find_by_blog(&BlogId::new()).await.unwrap();

   assert!(comments.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_find_by_blogs_は指定記事のコメントのみ返す(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let a = BlogId::new();
   let b = BlogId::new();
   let c = BlogId::new();
   sut.insert(&create_test_comment(&a, "on a", test_now_plus(1)))
      .await
      .unwrap();
   sut.insert(&create_test_comment(&b, "on b", test_now_plus(2)))
      .await
      .unwrap();
   sut.insert(&create_test_comment(&c, "on c", test_now_plus(3)))
      .await
      .unwrap();

   let comments = sut.find_by_blogs(&[a, b]).await.unwrap();

   let bodies: Vec<&str> = comments.iter().map(|c| c.body().as_str()).collect();
   assert_eq!(bodies, vec!["on a", "on b"]);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_find_by_id_in_blog_別記事のidでは解決しない(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let owner = BlogId::new();
   let comment = create_test_comment(&owner, "mine", test_now_plus(0));
   sut.insert(&comment).await.unwrap();

   assert_eq!(
      sut.find_by_id_in_blog(&owner, comment.id()).await.unwrap(),
      Some(comment.clone())
   );
   assert!(
      sut.find_by_id_in_blog(&BlogId::new(), comment.id())
         .await
         .unwrap()
         .is_none()
   );
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_update_は本文のみ書き込む(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let blog_id = BlogId::new();
   let comment = create_test_comment(&blog_id, "before", test_now_plus(0));
   sut.insert(&comment).await.unwrap();

   let changed = comment
      .clone()
      .apply_changes(
         CommentChanges {
            body: Some("after".to_string()),
         },
         test_now_plus(30),
      )
      .unwrap();
   let updated = sut.update(&changed).await.unwrap().unwrap();

   assert_eq!(updated.body().as_str(), "after");
   assert_eq!(updated.author(), comment.author());
   assert_eq!(updated.updated_at(), test_now_plus(30));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_delete_は2回目にfalseを返す(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let blog_id = BlogId::new();
   let comment = create_test_comment(&blog_id, "bye", test_now_plus(0));
   sut.insert(&comment).await.unwrap();

   assert!(sut.delete(&blog_id, comment.id()).await.unwrap());
   assert!(!sut.delete(&blog_id, comment.id()).await.unwrap());
   assert!(!sut.delete(&blog_id, &CommentId::new()).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要（DATABASE_URL）"]
async fn test_delete_by_blog_は対象記事のコメントをすべて削除する(pool: PgPool) {
   let sut = PostgresCommentRepository::new(pool);
   let target = BlogId::new();
   let other = BlogId::new();
   for i in 0..3 {
      sut.insert(&create_test_comment(&target, "cascade", test_now_plus(i)))
         .await
         .unwrap();
   }
   sut.insert(&create_test_comment(&other, "survivor", test_now_plus(9)))
      .await
      .unwrap();

   let deleted = sut.delete_by_blog(&target).await.unwrap();

   assert_eq!(deleted, 3);
   assert!(sut.find_by_blog(&target).await.unwrap().is_empty());
   assert_eq!(sut.find_by_blog(&other).await.unwrap().len(), 1);
}
