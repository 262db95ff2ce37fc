pub mod d001_profit;
