//! The six-tier grade table and the character-to-grade index.
//!
//! Grades are ordered from the sentinel `non-jouyou` tier (index 0) up
//! through the five JLPT levels, most basic first. The character data is
//! fixed at compile time and never mutated.

use std::collections::HashMap;

/// One classification tier: a display name plus its canonical members.
#[derive(Debug, Clone, Copy)]
pub struct Grade {
    /// Display label, e.g. "JLPT 5".
    pub name: &'static str,
    /// The tier's canonical member characters.
    pub chars: &'static str,
}

/// Index of the sentinel tier that receives every classified character
/// not found in grades 1-5. Its member set is empty by construction.
pub const NON_JOUYOU: usize = 0;

/// The fixed grade table, in ascending index order.
pub static GRADES: [Grade; 6] = [
    Grade {
        name: "non-jouyou",
        chars: "",
    },
    Grade {
        name: "JLPT 5",
        chars: "一右雨円下何火外学間気休金九月見五午後語校行高国今左三山四子時七車十出書女小上食人水生西先千川前大男中長天電土東読南二日入年白八半百父分聞母北本毎万名木友来六話",
    },
    Grade {
        name: "JLPT 4",
        chars: "悪安以医員飲院運映英駅屋音夏家歌花画会海界開楽漢館帰起急究牛去魚京強教業近銀空兄計建犬研験元言古公口工広考黒作仕使始姉思止死私紙試事字持自室質写社者借主手秋終習週集住重春少場色心新真親図世正青赤切早走送足族多体待貸代台題知地茶着昼注朝町鳥通弟店転田度冬答動同堂道特肉買売発飯病品不風服物文別勉歩方妹味明目問夜野有夕曜洋用理立旅料力",
    },
    Grade {
        name: "JLPT 3",
        chars: "愛暗位偉易違育因引泳越園演煙遠押横王化加果過解回皆絵害格確覚掛割活寒完官感慣観関顔願危喜寄幾期機記疑客吸求球給居許供共恐局曲勤苦具偶靴君係形景経警迎欠決件権険原現限呼互御誤交候光向好幸更構港降号合刻告込困婚差座最妻才歳済際在罪財昨察殺雑参散産賛残市指支歯似次治示耳辞式識失実若取守種酒首受収宿術処初所緒助除勝商招消笑乗常情状職信寝深申神進吹数制性成政晴精声静席昔石積責折説雪絶戦洗船選然全組想争相窓草増側息束速続存他太打対退宅達単探断段談値恥置遅調頂直追痛定庭程適点伝徒渡登都努怒倒投盗当等到逃頭働得突内難任認猫熱念能破馬敗杯背配箱髪抜判反犯晩番否彼悲疲費非飛備美必表貧付夫富怖浮負舞部福腹払平閉米変返便捕暮報抱放法訪亡忘忙望末満未民眠務夢娘命迷鳴面戻役約薬優由遊予余与容様葉要陽欲頼落利流留両良類例冷礼列連路労老論和逹",
    },
    Grade {
        name: "JLPT 2",
        chars: "圧依囲委移胃衣域印羽雲営栄永鋭液延塩汚央奥欧黄億温河荷菓課貨介快改械灰階貝各角革額乾刊巻干患換汗甘管簡缶丸含岸岩希机祈技喫詰逆久旧巨漁競協叫境挟橋況胸極玉均禁区隅掘訓群軍傾型敬軽芸劇血券県肩賢軒減個固庫戸枯湖雇効厚硬紅耕肯航荒講郊鉱香腰骨根混査砂再採祭細菜材坂咲冊刷札皿算伺刺枝糸脂詞誌児寺湿捨弱周州拾舟柔祝述準純順署諸召将床承昇焼照省章紹象賞城畳蒸植触伸森臣辛針震勢姓星清税隻籍績跡接設占専泉浅線双層捜掃燥総装像憎臓蔵贈造則測卒孫尊損村帯替袋濯谷担炭短団池築畜竹仲柱虫駐著貯兆庁超沈珍低停底泥滴鉄殿塗党凍塔島湯灯筒導童銅毒届曇鈍軟乳燃悩濃脳農波拝倍泊薄爆麦肌板版般販比皮被鼻匹筆氷秒瓶布普符膚武封副復幅複沸仏粉兵並片編辺補募包宝豊帽暴棒貿防磨埋枚綿毛門油輸勇郵預幼溶踊浴翌絡乱卵裏陸律略粒了涼療量領緑林輪涙令零齢歴恋練録湾腕",
    },
    Grade {
        name: "JLPT 1",
        chars: "亜阿哀葵茜握渥旭梓扱宛絢綾鮎案杏伊威尉惟慰為異緯遺井亥郁磯壱逸稲茨芋允姻胤陰隠韻烏卯丑渦唄浦瓜叡影瑛衛詠疫益悦謁閲宴怨援沿炎猿縁艶苑鉛於凹往応旺殴翁岡沖荻憶乙卸恩穏仮伽価可嘉嫁寡暇架禍稼箇茄華霞蚊我牙芽雅餓塊壊怪悔懐戒拐魁凱劾慨概涯街該馨垣嚇拡核殻獲穫較郭閣隔岳笠潟喝括渇滑褐轄且叶樺株蒲鎌茅刈瓦侃冠勘勧喚堪寛幹憾敢棺款歓環監看緩肝艦莞貫還鑑閑陥韓巌眼頑企伎器基奇嬉岐忌揮旗既棋棄毅汽稀貴軌輝飢騎鬼亀偽宜戯擬欺犠誼菊鞠吉橘却脚虐丘及宮弓救朽泣窮級糾拒拠挙虚距亨享凶匡喬峡恭狂狭矯脅興郷鏡響驚仰凝尭暁桐錦斤欣欽琴筋緊芹菌衿襟謹吟玖駆駒愚虞遇串屈窪熊栗繰桑勲薫郡袈刑啓圭契径恵慶慧憩掲携桂渓系継茎蛍鶏鯨撃激傑潔穴結倹健兼剣圏堅嫌憲懸拳検献絹謙遣顕厳幻弦源玄絃孤己弧故胡虎誇顧鼓伍呉吾娯悟梧瑚碁護乞鯉侯倖功后坑孔孝宏巧康弘恒慌抗拘控攻昂晃江洪浩溝甲皇稿紘絞綱衡貢購酵鋼項鴻剛拷豪克穀酷獄墾恨懇昆紺魂唆嵯沙瑳詐鎖裟債催哉宰彩栽災采砕斎裁載剤冴阪崎埼削搾朔策索錯桜笹撮擦皐傘惨桟燦蚕酸暫司姿志施旨氏祉紫肢至視諮賜雌飼侍慈爾磁蒔汐鹿軸執漆疾偲芝舎射赦斜煮紗謝遮蛇邪勺尺爵酌釈寂朱殊狩珠趣儒寿授樹需囚宗就修愁洲秀臭衆襲酬醜充従汁渋獣縦銃叔淑縮粛塾熟俊峻瞬竣舜駿准循旬殉淳潤盾巡遵暑曙渚庶叙序徐恕傷償匠升唱奨宵尚庄彰抄掌捷昌昭晶松梢沼渉焦症硝礁祥称粧肖菖蕉衝裳訟証詔詳鐘障丈丞冗剰壌嬢条浄穣譲醸錠嘱飾殖織辱侵唇娠審慎振晋榛浸秦紳薪診身仁刃尋甚尽迅陣須酢垂帥推炊睡粋翠衰遂酔錘随瑞髄崇嵩枢雛据杉澄寸瀬畝是征整牲盛聖製誠誓請逝斉惜斥析碩拙摂窃節舌仙宣扇栓染潜旋繊羨薦践遷銭銑鮮善漸禅繕塑措曽疎礎租粗素訴阻僧創倉喪壮奏爽惣挿操曹巣槽漕綜聡荘葬蒼藻遭霜騒促即俗属賊袖汰堕惰駄耐怠態泰滞胎逮隊黛鯛第鷹滝卓啄択拓沢琢託濁諾只但辰奪脱巽棚丹嘆旦淡端胆誕鍛壇弾暖檀痴稚致蓄逐秩窒嫡宙忠抽衷鋳猪丁帳弔張彫徴懲挑暢潮眺聴脹腸蝶跳勅朕賃鎮陳津墜椎塚槻漬辻蔦椿坪紬爪釣鶴亭偵貞呈堤帝廷悌抵提禎締艇訂逓邸摘敵的笛哲徹撤迭典展添吐斗杜賭奴刀唐悼搭桃棟痘糖統藤討謄豆踏透陶騰闘憧洞瞳胴峠匿徳督篤独栃凸寅酉屯惇敦豚奈那凪捺縄楠尼弐虹廿如尿妊忍寧粘乃之納巴把覇派婆俳廃排肺輩培媒梅賠陪萩伯博拍柏舶迫漠縛函肇畑鉢伐罰閥鳩隼伴帆搬班畔繁藩範煩頒盤蛮卑妃扉批披斐泌碑秘緋罷肥避尾微眉柊彦菱姫媛俵彪標漂票評描苗彬浜賓頻敏扶敷腐譜賦赴附侮楓蕗伏覆噴墳憤奮紛雰丙併塀幣弊柄陛頁壁癖碧偏遍弁保穂墓慕簿倣俸奉峰崩朋泡砲縫胞芳萌褒邦飽鳳鵬乏傍剖坊妨房某冒紡肪膨謀僕墨撲朴牧睦没堀幌奔翻凡盆摩魔麻槙幕膜柾亦又抹沫繭麿慢漫魅巳岬密蜜稔脈妙無矛霧椋婿盟銘滅免模茂妄孟猛盲網耗黙勿紋匁也冶耶弥矢厄訳躍靖柳愉癒諭唯佑宥幽悠憂柚湧猶祐裕誘邑雄融誉庸揚揺擁楊窯羊耀蓉謡遥養抑翼羅裸雷酪嵐欄濫藍蘭覧履李梨痢里離率琉硫隆竜慮虜亮僚凌寮猟瞭稜糧諒遼陵倫厘琳臨隣麟瑠塁累伶励嶺怜玲鈴隷霊麗暦劣烈裂廉蓮錬呂炉露廊朗楼浪漏郎禄倭賄脇惑枠亘侑勁匕奎嬌崚彗昴晏晨晟暉曰栞椰毬洸洵滉漱澪燎燿瑶皓眸笙綺綸翔脩茉莉菫詢諄赳迪頌颯黎凜熙",
    },
];

/// Mapping from character to grade index, built once per engine.
///
/// Construction walks the grades in ascending index order and records
/// every member character; later tiers overwrite earlier ones, so a
/// character shared between tiers classifies to the highest index.
#[derive(Debug, Clone)]
pub struct GradeIndex {
    map: HashMap<char, usize>,
}

impl GradeIndex {
    /// Build the index from the canonical [`GRADES`] table.
    pub fn new() -> Self {
        Self::from_grades(&GRADES)
    }

    /// Build an index from an arbitrary ordered grade list.
    pub fn from_grades(grades: &[Grade]) -> Self {
        let mut map = HashMap::new();
        for (index, grade) in grades.iter().enumerate() {
            for c in grade.chars.chars() {
                map.insert(c, index);
            }
        }
        Self { map }
    }

    /// Grade index for a character. Characters outside every tier
    /// classify to [`NON_JOUYOU`].
    pub fn classify(&self, c: char) -> usize {
        self.map.get(&c).copied().unwrap_or(NON_JOUYOU)
    }
}

impl Default for GradeIndex {
    fn default() -> Self {
        Self::new()
    }
}
