mod cart;
mod category;
mod coupon;
mod order;
mod product;
mod review;
mod setting;
mod stats;
mod user;
