pub use super::banner::Entity as Banner;
pub use super::cart::Entity as Cart;
pub use super::cart_item::Entity as CartItem;
pub use super::category::Entity as Category;
pub use super::coupon::Entity as Coupon;
pub use super::media::Entity as Media;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::post::Entity as Post;
pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::review::Entity as Review;
pub use super::setting::Entity as Setting;
pub use super::user::Entity as User;
