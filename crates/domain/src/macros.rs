/// UUID v7 ベースの ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: UUID v7 を生成
/// - `from_uuid()` / `as_uuid()`
/// - `FromStr`: パスパラメータなど外部入力からのパース
/// - `Default` impl（`new()` に委譲）
///
/// # 使用例
///
/// ```rust
/// use blogapi_domain::blog::BlogId;
///
/// let id = BlogId::new();
/// let restored: BlogId = id.to_string().parse().unwrap();
/// assert_eq!(id, restored);
/// assert!("123".parse::<BlogId>().is_err());
/// ```
macro_rules! define_uuid_id {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident;
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, PartialEq, Eq, Hash,
         serde::Serialize, serde::Deserialize,
         derive_more::Display,
      )]
      #[display("{_0}")]
      $vis struct $Name(uuid::Uuid);

      impl $Name {
         /// 新しい ID を生成する（UUID v7）
         pub fn new() -> Self {
            Self(uuid::Uuid::now_v7())
         }

         /// 既存の UUID から ID を作成する
         pub fn from_uuid(uuid: uuid::Uuid) -> Self {
            Self(uuid)
         }

         /// 内部の UUID 参照を取得する
         pub fn as_uuid(&self) -> &uuid::Uuid {
            &self.0
         }
      }

      impl std::str::FromStr for $Name {
         type Err = uuid::Error;

         fn from_str(s: &str) -> Result<Self, Self::Err> {
            uuid::Uuid::parse_str(s).map(Self)
         }
      }

      impl Default for $Name {
         fn default() -> Self {
            Self::new()
         }
      }
   };
}

/// 文字数の上下限を持つ String Newtype を定義する宣言型マクロ
///
/// 以下を一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `MIN_LENGTH` / `MAX_LENGTH` 定数
/// - `new()`: 空チェック + 最小長チェック + 最大長チェック
/// - `from_input()`: 未指定（`None`）を必須エラーとして扱う
/// - `as_str()` / `into_string()` / `Display`
///
/// 値は trim しない。文字数は `chars().count()` で数える。
/// 空文字列は未指定と同じ扱いで、`required` メッセージを返す。
///
/// # 引数
///
/// - `min_length` / `max_length`: 文字数の下限・上限（両端を含む）
/// - `required` / `too_short` / `too_long`: 違反時にクライアントへ返すメッセージ
macro_rules! define_bounded_string {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident {
         min_length: $min:expr,
         max_length: $max:expr,
         required: $required:expr,
         too_short: $too_short:expr,
         too_long: $too_long:expr $(,)?
      }
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, PartialEq, Eq,
         serde::Serialize, serde::Deserialize,
      )]
      #[serde(transparent)]
      $vis struct $Name(String);

      impl $Name {
         /// 最小文字数
         pub const MIN_LENGTH: usize = $min;
         /// 最大文字数
         pub const MAX_LENGTH: usize = $max;

         pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
            let value = value.into();
            let length = value.chars().count();

            if length == 0 {
               return Err($crate::DomainError::validation($required));
            }
            if length < Self::MIN_LENGTH {
               return Err($crate::DomainError::validation($too_short));
            }
            if length > Self::MAX_LENGTH {
               return Err($crate::DomainError::validation($too_long));
            }

            Ok(Self(value))
         }

         /// リクエストボディのフィールドから作成する
         pub fn from_input(value: Option<String>) -> Result<Self, $crate::DomainError> {
            match value {
               Some(value) => Self::new(value),
               None => Err($crate::DomainError::validation($required)),
            }
         }

         /// 文字列参照を取得する
         pub fn as_str(&self) -> &str {
            &self.0
         }

         /// 所有権を持つ文字列に変換する
         pub fn into_string(self) -> String {
            self.0
         }
      }

      impl std::fmt::Display for $Name {
         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
         }
      }
   };
}
