//! Goods route module

use super::component::{LazyComponent, card_list_view, default_layout, goods_list_view};
use super::{RouteMeta, RouteRecord};

/// `/goods` under the default layout, with the goods list and card pages
pub fn goods_routes() -> RouteRecord {
    RouteRecord::new("/goods", "goods", LazyComponent::new(default_layout))
        .with_meta(
            RouteMeta::new("menu.goods")
                .requires_auth()
                .with_icon("icon-list")
                .with_order(2),
        )
        .with_child(
            RouteRecord::new("goods-list", "GoodsList", LazyComponent::new(goods_list_view))
                .with_meta(
                    RouteMeta::new("menu.goods.list")
                        .requires_auth()
                        .with_roles(["*"]),
                ),
        )
        .with_child(
            RouteRecord::new("card", "Card", LazyComponent::new(card_list_view)).with_meta(
                RouteMeta::new("menu.list.cardList")
                    .requires_auth()
                    .with_roles(["*"]),
            ),
        )
}
