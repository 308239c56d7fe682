pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod ticket_sales {
        pub mod core {
            pub mod cart;
            pub mod symbol;
            pub mod ticket;
        }
        pub mod use_cases {
            pub mod manage_cart {
                pub mod inbound {
                    pub mod http;
                }
                pub mod store;
            }
            pub mod complete_purchase {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_tickets {
                pub mod inbound {
                    pub mod http;
                }
                pub mod ledger;
            }
        }
        pub mod infrastructure {
            pub mod catalog;
            pub mod ticket_gateway;
        }
    }
}

pub mod shell;
