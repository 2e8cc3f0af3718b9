pub mod a001_deal;
