//! kakariのテストモジュール群
//!
//! モジュール単体のテストは各モジュール内にあり、ここには
//! パーサ・補正パス・グラフ蓄積を横断するシナリオテストを置きます。

mod scenarios;
