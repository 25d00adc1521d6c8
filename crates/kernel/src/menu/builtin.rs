//! Built-in navigation of the cooperative shell.

use super::entry::MenuEntry;

/// Root entries of the default catalog, in display order.
pub(super) fn koperasi_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("dashboard", "Dashboard", "/dashboard").icon("home"),
        MenuEntry::link("anggota", "Anggota", "/anggota").icon("users"),
        MenuEntry::link("simpanan", "Simpanan", "/simpanan")
            .icon("piggy-bank")
            .child(MenuEntry::link("simpanan/kategori", "Kategori Simpanan", "/simpanan/kategori"))
            .child(MenuEntry::link("simpanan/data", "Data Simpanan", "/simpanan/data"))
            .child(MenuEntry::link("simpanan/penarikan", "Penarikan", "/simpanan/penarikan")),
        MenuEntry::link("pinjaman", "Pinjaman", "/pinjaman")
            .icon("hand-coins")
            .child(MenuEntry::link("pinjaman/kategori", "Kategori Pinjaman", "/pinjaman/kategori"))
            .child(MenuEntry::link("pinjaman/data", "Data Pinjaman", "/pinjaman/data"))
            .child(MenuEntry::link("pinjaman/angsuran", "Angsuran", "/pinjaman/angsuran")),
        MenuEntry::link("data-keuangan", "Data Keuangan", "/data-keuangan").icon("banknote"),
        MenuEntry::link("anggota-meninggal", "Anggota Meninggal", "/anggota-meninggal")
            .icon("user-x"),
        MenuEntry::link("akuntansi", "Akuntansi", "/akuntansi")
            .icon("calculator")
            .child(MenuEntry::link("akuntansi/coa", "Chart of Accounts", "/akuntansi/coa"))
            .child(MenuEntry::link("akuntansi/jurnal-umum", "Jurnal Umum", "/akuntansi/jurnal-umum"))
            .child(MenuEntry::link("akuntansi/buku-besar", "Buku Besar", "/akuntansi/buku-besar")),
        MenuEntry::link("laporan", "Laporan", "/laporan")
            .icon("file-chart")
            .child(MenuEntry::link("laporan/neraca", "Neraca", "/laporan/neraca"))
            .child(MenuEntry::link("laporan/laba-rugi", "Laba Rugi", "/laporan/laba-rugi"))
            .child(MenuEntry::link("laporan/arus-kas", "Arus Kas", "/laporan/arus-kas")),
        MenuEntry::link("ppob", "PPOB", "/ppob")
            .icon("zap")
            .child(MenuEntry::link("ppob/pulsa", "Pulsa & Data", "/ppob/pulsa"))
            .child(MenuEntry::link("ppob/listrik", "Listrik PLN", "/ppob/listrik"))
            .child(MenuEntry::link("ppob/pdam", "Air PDAM", "/ppob/pdam")),
        MenuEntry::link("konfigurasi", "Konfigurasi", "/konfigurasi")
            .icon("settings")
            .child(MenuEntry::link("konfigurasi/aplikasi", "Aplikasi", "/konfigurasi/aplikasi"))
            .child(MenuEntry::link("konfigurasi/pengguna", "Pengguna", "/konfigurasi/pengguna"))
            .child(MenuEntry::link("konfigurasi/role", "Role", "/konfigurasi/role")),
        MenuEntry::link("master", "Master Data", "/master")
            .icon("database")
            .child(MenuEntry::link("master/bank", "Bank", "/master/bank"))
            .child(MenuEntry::link("master/wilayah", "Wilayah", "/master/wilayah"))
            .child(MenuEntry::link("master/jabatan", "Jabatan", "/master/jabatan")),
        MenuEntry::separator("pemisah-marketplace", "Marketplace"),
        MenuEntry::link("dashboard-marketplace", "Dashboard Marketplace", "/marketplace/dashboard")
            .icon("store"),
        MenuEntry::link("master-marketplace", "Master Marketplace", "/marketplace/master")
            .icon("boxes")
            .child(MenuEntry::link(
                "master-marketplace/kategori",
                "Kategori Produk",
                "/marketplace/master/kategori",
            ))
            .child(MenuEntry::link(
                "master-marketplace/ekspedisi",
                "Ekspedisi",
                "/marketplace/master/ekspedisi",
            )),
        MenuEntry::link("product-marketplace", "Produk", "/marketplace/product").icon("package"),
        MenuEntry::link("transaction-marketplace", "Transaksi", "/marketplace/transaction")
            .icon("receipt"),
        MenuEntry::link("seller-marketplace", "Seller", "/marketplace/seller").icon("badge-check"),
        MenuEntry::link("profile-toko", "Profil Toko", "/marketplace/profile-toko").icon("store"),
    ]
}
