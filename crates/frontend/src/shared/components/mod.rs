pub mod bulk_action_bar;
pub mod managed_list;
pub mod pagination_controls;
pub mod table;
